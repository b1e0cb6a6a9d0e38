mod catalog;
mod error;
mod mock;
mod synthetic;
mod types;

use serde::Deserialize;
use std::sync::Arc;

use crate::random::RandomSource;

pub use error::ProviderError;
pub use mock::MockProvider;
pub use synthetic::SyntheticProvider;
pub use types::*;

/// Source of the imagery, climate and catalog payloads behind `/api/nasa`.
pub trait NasaProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn earth_imagery(&self, query: &ImageryQuery) -> Result<ImageryRecord, ProviderError>;

    fn climate(&self, query: &ClimateQuery) -> Result<ClimateRecord, ProviderError>;

    fn satellite_catalog(&self) -> Result<SatelliteCatalog, ProviderError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    #[default]
    Synthetic,
    Mock,
}

pub fn build_provider(kind: ProviderKind, rng: RandomSource) -> Arc<dyn NasaProvider> {
    match kind {
        ProviderKind::Synthetic => Arc::new(SyntheticProvider::new()),
        ProviderKind::Mock => Arc::new(MockProvider::new(rng)),
    }
}
