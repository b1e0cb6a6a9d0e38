use std::sync::Arc;

use crate::nasa::{build_provider, NasaProvider};
use crate::random::RandomSource;

use super::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub nasa: Arc<dyn NasaProvider>,
    pub rng: RandomSource,
}

impl AppState {
    /// Single composition point: picks the provider and random source from
    /// the configuration.
    pub fn from_config(config: &Config) -> Self {
        let rng = RandomSource::from_seed(config.random.seed);
        let nasa = build_provider(config.nasa.provider, rng.clone());
        Self { nasa, rng }
    }
}
