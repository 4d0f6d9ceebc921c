//! System endpoints: health check, relay status, unmatched routes.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::{HealthResponse, RelayStatusResponse};
use crate::app_state::AppState;
use crate::error::RelayError;

/// `GET /relay/health` — Service health status.
#[utoipa::path(
    get,
    path = "/relay/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// `GET /relay/status` — Registered address and last device status.
#[utoipa::path(
    get,
    path = "/relay/status",
    tag = "System",
    summary = "Relay status",
    description = "Returns the registered device address, the last status pushed over the status channel, and the number of open status connections.",
    responses(
        (status = 200, description = "Current relay status", body = RelayStatusResponse),
    )
)]
pub async fn relay_status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let registered_address = state.registry.current().await.map(|a| a.to_string());
    let status = state.status.current();

    Json(RelayStatusResponse {
        registered_address,
        status_updated_at: status.as_ref().map(|s| s.received_at),
        status: status.map(|s| s.text),
        connected_devices: state.status.connection_count(),
    })
}

/// Fallback for paths that match no route.
pub async fn not_found_handler(uri: Uri) -> RelayError {
    RelayError::RouteNotFound(uri.path().to_string())
}

/// System routes under the `/relay` prefix.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/relay/health", get(health_handler))
        .route("/relay/status", get(relay_status_handler))
}
