//! REST API layer: route handlers, DTOs, OpenAPI document, and the
//! fully layered application router.

pub mod dto;
pub mod handlers;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::middleware;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::app_state::AppState;
use crate::config::RelayConfig;
use crate::ws::handler::status_upgrade;

/// OpenAPI document for every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "air-relay",
        description = "Relay between an ESP32 air-quality controller and its web client"
    ),
    paths(
        handlers::register::register_device,
        handlers::sensor::ingest_reading,
        handlers::sensor::latest_reading,
        handlers::command::forward_command,
        handlers::system::health_handler,
        handlers::system::relay_status_handler,
    ),
    components(schemas(
        dto::MessageResponse,
        dto::RegisterRequest,
        dto::SensorDataRequest,
        dto::RelayStatusResponse,
        dto::HealthResponse,
        crate::domain::SensorReading,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "Device", description = "Registration and command forwarding"),
        (name = "Sensors", description = "Latest sensor reading"),
        (name = "System", description = "Relay introspection"),
    )
)]
pub struct ApiDoc;

/// Builds the REST router with all endpoints and the OpenAPI document.
pub fn build_router() -> Router<AppState> {
    Router::new().merge(handlers::routes()).merge(docs_routes())
}

/// Builds the complete application: REST routes, the status channel
/// upgrade on every path, tracing, and the CORS allow list.
pub fn build_app(state: AppState, config: &RelayConfig) -> Router {
    Router::new()
        .merge(build_router())
        .fallback(handlers::system::not_found_handler)
        .layer(middleware::from_fn_with_state(state.clone(), status_upgrade))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins))
        .with_state(state)
}

/// CORS policy: listed origins only, `GET`/`POST`, `Content-Type` header.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(feature = "swagger-ui")]
fn docs_routes() -> Router<AppState> {
    Router::new().merge(
        utoipa_swagger_ui::SwaggerUi::new("/relay/docs").url("/relay/openapi.json", ApiDoc::openapi()),
    )
}

#[cfg(not(feature = "swagger-ui"))]
fn docs_routes() -> Router<AppState> {
    use axum::Json;
    use axum::routing::get;

    Router::new().route("/relay/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}
