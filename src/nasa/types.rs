use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ImageryQuery {
    /// Latitude in degrees. Accepted but not used to build the tile URL.
    pub lat: Option<f64>,
    /// Longitude in degrees. Accepted but not used to build the tile URL.
    pub lon: Option<f64>,
    /// Acquisition date (`YYYY-MM-DD`); defaults per provider.
    pub date: Option<String>,
}

impl ImageryQuery {
    /// The caller's date, treating an empty `date=` as absent.
    pub fn requested_date(&self) -> Option<&str> {
        self.date.as_deref().filter(|d| !d.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClimateQuery {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
}

/// Imagery metadata with a constructed, never fetched, tile URL.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ImageryRecord {
    pub source: String,
    pub date: String,
    pub resolution: String,
    pub bands: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Coordinate-derived synthetic weather reading.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ClimateRecord {
    pub temperature_2m: f64,
    pub precipitation: f64,
    pub surface_pressure: f64,
    pub wind_speed_2m: f64,
    pub coordinates: Coordinates,
    pub timestamp: DateTime<Local>,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SatelliteInfo {
    pub name: String,
    pub description: String,
    pub resolution: String,
    pub bands: Vec<String>,
    pub update_frequency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SatelliteCatalog {
    pub available_satellites: Vec<SatelliteInfo>,
    pub last_updated: DateTime<Local>,
}
