pub mod environment;
pub mod error;
pub mod nasa;
pub mod system;
