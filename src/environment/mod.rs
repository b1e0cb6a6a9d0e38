mod legacy;
mod snapshot;
mod types;

pub use legacy::{available_layers, current_environment, environment_metrics, imagery_sources};
pub use snapshot::current_snapshot;
pub use types::*;
