use chrono::{DateTime, Local};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

/// Display label for a metric's change; most are text, co2 is a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum Change {
    Amount(i64),
    Label(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum MetricValue {
    Count(i64),
    Decimal(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Metric {
    pub value: MetricValue,
    pub trend: Trend,
    pub change: Change,
}

/// Point-in-time bundle of the seven dashboard metrics.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSnapshot {
    pub temperature: Metric,
    pub co2: Metric,
    pub sea_level: Metric,
    pub forest_cover: Metric,
    pub biodiversity: Metric,
    pub ice_cover: Metric,
    pub air_quality: Metric,
}

/// Flat readings served by `/api/environment/current`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CurrentEnvironment {
    pub temperature: f64,
    pub co2_levels: f64,
    pub deforestation_rate: f64,
    pub biodiversity_index: f64,
    pub air_quality: f64,
    pub sea_level_rise: f64,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MetricReading {
    pub value: f64,
    pub unit: &'static str,
    pub change: &'static str,
    pub trend: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MetricTable {
    pub global_temperature: MetricReading,
    pub co2_concentration: MetricReading,
    pub sea_level_rise: MetricReading,
    pub forest_cover_loss: MetricReading,
    pub biodiversity_index: MetricReading,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EnvironmentMetrics {
    pub metrics: MetricTable,
    pub last_updated: DateTime<Local>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Layer {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LayerList {
    pub layers: Vec<Layer>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImagerySource {
    pub name: &'static str,
    pub description: &'static str,
    pub resolution: &'static str,
    pub update_frequency: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImagerySources {
    pub sources: Vec<ImagerySource>,
}
