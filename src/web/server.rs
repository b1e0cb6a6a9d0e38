use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::api::environment as environment_handlers;
use super::api::error::panic_response;
use super::api::nasa as nasa_handlers;
use super::api::system as system_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(system_handlers::root))
        .route("/health", get(system_handlers::health))
        // Dashboard endpoints
        .route("/api/environment/data", get(environment_handlers::data))
        .route("/api/environment/current", get(environment_handlers::current))
        .route("/api/environment/metrics", get(environment_handlers::metrics))
        .route("/api/layers", get(environment_handlers::layers))
        .route(
            "/api/satellite/imagery",
            get(environment_handlers::satellite_imagery),
        )
        // NASA endpoints
        .route("/api/nasa/imagery", get(nasa_handlers::imagery))
        .route("/api/nasa/climate", get(nasa_handlers::climate))
        .route("/api/nasa/satellites", get(nasa_handlers::satellites))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let state = AppState::from_config(&config);

    log::info!(
        "Using {} NASA provider ({})",
        state.nasa.name(),
        match config.random.seed {
            Some(seed) => format!("seed {}", seed),
            None => "entropy".to_string(),
        }
    );

    let bind_addr = config.web.bind;
    let app = router(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use chrono::{Duration, Local};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::nasa::ProviderKind;

    fn app() -> Router {
        router(AppState::from_config(&Config::default()))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let (status, json) = get_json(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn root_reports_version() {
        let (status, json) = get_json(app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Welcome to GaiaNet API");
        assert_eq!(json["version"], "1.0.0");
    }

    #[tokio::test]
    async fn environment_data_has_seven_metrics() {
        let (status, json) = get_json(app(), "/api/environment/data").await;
        assert_eq!(status, StatusCode::OK);
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        for key in [
            "temperature",
            "co2",
            "seaLevel",
            "forestCover",
            "biodiversity",
            "iceCover",
            "airQuality",
        ] {
            assert!(keys.iter().any(|k| k == key), "missing {key}");
        }
    }

    #[tokio::test]
    async fn legacy_endpoints_serve_fixed_payloads() {
        let (_, current) = get_json(app(), "/api/environment/current").await;
        assert_eq!(current["co2_levels"], 417.5);

        let (_, metrics) = get_json(app(), "/api/environment/metrics").await;
        assert_eq!(metrics["metrics"]["global_temperature"]["value"], 15.2);

        let (_, layers) = get_json(app(), "/api/layers").await;
        assert_eq!(layers["layers"].as_array().unwrap().len(), 6);

        let (_, sources) = get_json(app(), "/api/satellite/imagery").await;
        assert_eq!(sources["sources"][0]["name"], "MODIS Terra");
    }

    #[tokio::test]
    async fn climate_defaults_to_origin() {
        let (status, json) = get_json(app(), "/api/nasa/climate").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["temperature_2m"], 25.0);
        assert_eq!(json["data"]["surface_pressure"], 1013.25);
        assert_eq!(json["data"]["coordinates"]["lat"], 0.0);
    }

    #[tokio::test]
    async fn climate_rejects_non_numeric_latitude() {
        let (status, _) = get_json(app(), "/api/nasa/climate?lat=north").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn imagery_embeds_requested_date() {
        let (_, json) = get_json(app(), "/api/nasa/imagery?lat=1.5&lon=2&date=2024-01-01").await;
        assert_eq!(json["message"], "Satellite imagery data retrieved");
        assert_eq!(json["data"]["date"], "2024-01-01");
        assert!(json["data"]["image_url"]
            .as_str()
            .unwrap()
            .contains("TIME=2024-01-01"));
    }

    #[tokio::test]
    async fn imagery_defaults_to_yesterday() {
        let expected = (Local::now() - Duration::days(1)).format("%Y-%m-%d").to_string();
        let (_, json) = get_json(app(), "/api/nasa/imagery").await;
        assert_eq!(json["data"]["date"], expected.as_str());
    }

    #[tokio::test]
    async fn empty_imagery_date_falls_back_to_yesterday() {
        let expected = (Local::now() - Duration::days(1)).format("%Y-%m-%d").to_string();
        let (status, json) = get_json(app(), "/api/nasa/imagery?date=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["date"], expected.as_str());
        assert!(json["data"]["image_url"]
            .as_str()
            .unwrap()
            .ends_with(&format!("TIME={expected}")));
    }

    #[tokio::test]
    async fn climate_rounds_half_degree_latitudes() {
        let (_, json) = get_json(app(), "/api/nasa/climate?lat=2.5").await;
        assert_eq!(json["data"]["precipitation"], 2.2);
        assert_eq!(json["data"]["wind_speed_2m"], 3.2);
    }

    #[tokio::test]
    async fn satellites_are_wrapped_in_envelope() {
        let (_, json) = get_json(app(), "/api/nasa/satellites").await;
        assert_eq!(json["status"], "success");
        let names: Vec<_> = json["data"]["available_satellites"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["MODIS Terra", "MODIS Aqua", "VIIRS"]);
    }

    #[tokio::test]
    async fn mock_provider_omits_image_url() {
        let mut config = Config::default();
        config.nasa.provider = ProviderKind::Mock;
        let (_, json) = get_json(router(AppState::from_config(&config)), "/api/nasa/imagery").await;
        assert_eq!(json["data"]["date"], Local::now().format("%Y-%m-%d").to_string().as_str());
        assert!(json["data"].get("image_url").is_none());
    }

    #[tokio::test]
    async fn seeded_servers_agree_on_snapshots() {
        let seeded = || {
            let mut config = Config::default();
            config.random.seed = Some(2024);
            router(AppState::from_config(&config))
        };
        let (_, a) = get_json(seeded(), "/api/environment/data").await;
        let (_, b) = get_json(seeded(), "/api/environment/data").await;
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let response = app()
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn panics_render_error_envelope() {
        let app = Router::new()
            .route("/boom", get(|| async { panic!("kaboom") as () }))
            .layer(CatchPanicLayer::custom(panic_response));
        let (status, json) = get_json(app, "/boom").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "kaboom");
    }
}
