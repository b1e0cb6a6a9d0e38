use chrono::{DateTime, Duration, Local};

use crate::numeric::round_tenth;

use super::catalog::satellite_catalog;
use super::error::ProviderError;
use super::types::{
    ClimateQuery, ClimateRecord, Coordinates, ImageryQuery, ImageryRecord, SatelliteCatalog,
};
use super::NasaProvider;

pub const CLIMATE_SOURCE: &str = "NASA POWER API";
pub const STANDARD_PRESSURE_HPA: f64 = 1013.25;

const GIBS_TRUE_COLOR_URL: &str = "https://gibs.earthdata.nasa.gov/wms/epsg4326/best/wms.cgi?SERVICE=WMS&REQUEST=GetMap&LAYERS=MODIS_Terra_CorrectedReflectance_TrueColor&CRS=EPSG:4326&WIDTH=512&HEIGHT=512&BBOX=-180,-90,180,90&FORMAT=image/jpeg&TIME=";

pub(super) fn imagery_bands() -> Vec<String> {
    ["true_color", "vegetation", "temperature"]
        .iter()
        .map(|b| b.to_string())
        .collect()
}

/// Arithmetic model of the imagery and climate endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticProvider;

impl SyntheticProvider {
    pub fn new() -> Self {
        Self
    }
}

/// Imagery record for the requested date, or for the day before `now`.
pub fn earth_imagery(query: &ImageryQuery, now: DateTime<Local>) -> ImageryRecord {
    let date = match query.requested_date() {
        Some(date) => date.to_string(),
        None => (now - Duration::days(1)).format("%Y-%m-%d").to_string(),
    };

    ImageryRecord {
        source: "MODIS Terra".to_string(),
        image_url: Some(format!("{GIBS_TRUE_COLOR_URL}{date}")),
        date,
        resolution: "250m".to_string(),
        bands: imagery_bands(),
        metadata: None,
    }
}

/// Temperature falls off with latitude; precipitation never goes negative.
pub fn climate_at(lat: f64, lon: f64, now: DateTime<Local>) -> ClimateRecord {
    let base_temp = 25.0 - lat.abs() * 0.6;

    ClimateRecord {
        temperature_2m: round_tenth(base_temp + lon * 0.01),
        precipitation: round_tenth((2.0 + lat * 0.1).max(0.0)),
        surface_pressure: STANDARD_PRESSURE_HPA,
        wind_speed_2m: round_tenth(3.0 + lat.abs() * 0.1),
        coordinates: Coordinates { lat, lon },
        timestamp: now,
        source: CLIMATE_SOURCE.to_string(),
    }
}

impl NasaProvider for SyntheticProvider {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    fn earth_imagery(&self, query: &ImageryQuery) -> Result<ImageryRecord, ProviderError> {
        Ok(earth_imagery(query, Local::now()))
    }

    fn climate(&self, query: &ClimateQuery) -> Result<ClimateRecord, ProviderError> {
        Ok(climate_at(query.lat, query.lon, Local::now()))
    }

    fn satellite_catalog(&self) -> Result<SatelliteCatalog, ProviderError> {
        Ok(satellite_catalog(Local::now()))
    }
}
