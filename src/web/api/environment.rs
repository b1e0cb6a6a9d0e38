use axum::{extract::State, Json};
use chrono::Local;

use crate::environment::{
    self, CurrentEnvironment, EnvironmentMetrics, EnvironmentSnapshot, ImagerySources, LayerList,
};
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/api/environment/data",
    tag = "environment",
    responses((status = 200, description = "Randomized metric snapshot", body = EnvironmentSnapshot))
)]
pub async fn data(State(state): State<AppState>) -> Json<EnvironmentSnapshot> {
    Json(environment::current_snapshot(&state.rng))
}

#[utoipa::path(
    get,
    path = "/api/environment/current",
    tag = "environment",
    responses((status = 200, description = "Flat current readings", body = CurrentEnvironment))
)]
pub async fn current() -> Json<CurrentEnvironment> {
    Json(environment::current_environment(Local::now()))
}

#[utoipa::path(
    get,
    path = "/api/environment/metrics",
    tag = "environment",
    responses((status = 200, description = "Metrics with units and trends", body = EnvironmentMetrics))
)]
pub async fn metrics() -> Json<EnvironmentMetrics> {
    Json(environment::environment_metrics(Local::now()))
}

#[utoipa::path(
    get,
    path = "/api/layers",
    tag = "environment",
    responses((status = 200, description = "Map data layers", body = LayerList))
)]
pub async fn layers() -> Json<LayerList> {
    Json(environment::available_layers())
}

#[utoipa::path(
    get,
    path = "/api/satellite/imagery",
    tag = "environment",
    responses((status = 200, description = "Imagery sources", body = ImagerySources))
)]
pub async fn satellite_imagery() -> Json<ImagerySources> {
    Json(environment::imagery_sources())
}
