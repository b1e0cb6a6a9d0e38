use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("upstream unavailable: {0}")]
    #[allow(dead_code)]
    Unavailable(String),
}
