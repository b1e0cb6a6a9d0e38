use axum::{
    extract::{Query, State},
    Json,
};

use crate::nasa::{ClimateQuery, ClimateRecord, ImageryQuery, ImageryRecord, SatelliteCatalog};
use crate::web::api::error::{ApiError, ApiResult, Envelope, ErrorEnvelope};
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/api/nasa/imagery",
    tag = "nasa",
    params(ImageryQuery),
    responses(
        (status = 200, description = "Imagery record, or an error envelope", body = Envelope<ImageryRecord>),
        (status = 400, description = "Non-numeric coordinates")
    )
)]
pub async fn imagery(
    State(state): State<AppState>,
    Query(query): Query<ImageryQuery>,
) -> ApiResult<Json<Envelope<ImageryRecord>>> {
    let record = state
        .nasa
        .earth_imagery(&query)
        .map_err(ApiError::provider("Failed to retrieve imagery"))?;

    Ok(Json(Envelope::success(
        record,
        "Satellite imagery data retrieved",
    )))
}

#[utoipa::path(
    get,
    path = "/api/nasa/climate",
    tag = "nasa",
    params(ClimateQuery),
    responses(
        (status = 200, description = "Climate record, or an error envelope", body = Envelope<ClimateRecord>),
        (status = 400, description = "Non-numeric coordinates")
    )
)]
pub async fn climate(
    State(state): State<AppState>,
    Query(query): Query<ClimateQuery>,
) -> ApiResult<Json<Envelope<ClimateRecord>>> {
    let record = state
        .nasa
        .climate(&query)
        .map_err(ApiError::provider("Failed to retrieve climate data"))?;

    Ok(Json(Envelope::success(record, "Climate data retrieved")))
}

#[utoipa::path(
    get,
    path = "/api/nasa/satellites",
    tag = "nasa",
    responses(
        (status = 200, description = "Satellite catalog, or an error envelope", body = Envelope<SatelliteCatalog>),
        (status = 500, description = "Handler failure", body = ErrorEnvelope)
    )
)]
pub async fn satellites(
    State(state): State<AppState>,
) -> ApiResult<Json<Envelope<SatelliteCatalog>>> {
    let catalog = state
        .nasa
        .satellite_catalog()
        .map_err(ApiError::provider("Failed to retrieve satellite metadata"))?;

    Ok(Json(Envelope::success(
        catalog,
        "Satellite metadata retrieved",
    )))
}
