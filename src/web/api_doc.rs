use utoipa::OpenApi;

use crate::environment::{
    Change, CurrentEnvironment, EnvironmentMetrics, EnvironmentSnapshot, ImagerySource,
    ImagerySources, Layer, LayerList, Metric, MetricReading, MetricTable, MetricValue, Trend,
};
use crate::nasa::{ClimateRecord, Coordinates, ImageryRecord, SatelliteCatalog, SatelliteInfo};

use super::api::error::{EnvelopeStatus, ErrorEnvelope};
use super::api::system::{HealthResponse, RootResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::system::root,
        super::api::system::health,
        super::api::environment::data,
        super::api::environment::current,
        super::api::environment::metrics,
        super::api::environment::layers,
        super::api::environment::satellite_imagery,
        super::api::nasa::imagery,
        super::api::nasa::climate,
        super::api::nasa::satellites,
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            EnvironmentSnapshot,
            Metric,
            MetricValue,
            Trend,
            Change,
            CurrentEnvironment,
            EnvironmentMetrics,
            MetricTable,
            MetricReading,
            LayerList,
            Layer,
            ImagerySources,
            ImagerySource,
            ImageryRecord,
            ClimateRecord,
            Coordinates,
            SatelliteCatalog,
            SatelliteInfo,
            EnvelopeStatus,
            ErrorEnvelope,
        )
    ),
    info(
        title = "GaiaNet API",
        description = "Synthetic environmental and satellite data for the GaiaNet dashboard",
        version = "1.0.0"
    ),
    tags(
        (name = "system", description = "Banner and health"),
        (name = "environment", description = "Dashboard metrics and layers"),
        (name = "nasa", description = "Imagery, climate and satellite catalog")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().map(String::as_str).collect();
        for path in [
            "/",
            "/health",
            "/api/environment/data",
            "/api/environment/current",
            "/api/environment/metrics",
            "/api/layers",
            "/api/satellite/imagery",
            "/api/nasa/imagery",
            "/api/nasa/climate",
            "/api/nasa/satellites",
        ] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }
}
