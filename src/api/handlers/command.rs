//! Command forwarding endpoint.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use crate::app_state::AppState;
use crate::error::{ErrorResponse, RelayError};

/// `GET /{command}` — Forward a command to the device.
///
/// # Errors
///
/// Returns [`RelayError::NotRegistered`] if no device has registered, or
/// [`RelayError::ForwardingFailed`] if the device call fails.
#[utoipa::path(
    get,
    path = "/{command}",
    tag = "Device",
    summary = "Forward a command",
    description = "Sends GET /{command} to the device and relays its response body unchanged.",
    params(
        ("command" = String, Path, description = "Opaque device command"),
    ),
    responses(
        (status = 200, description = "Device response body"),
        (status = 400, description = "No device registered", body = ErrorResponse),
        (status = 500, description = "Device unreachable or returned an error", body = ErrorResponse),
    )
)]
pub async fn forward_command(
    State(state): State<AppState>,
    Path(command): Path<String>,
) -> Result<impl IntoResponse, RelayError> {
    tracing::info!(%command, "command received");
    state.forwarder.forward(&command).await
}

/// `GET /register` — Static route that shadows `/{command}` for
/// `register`; forwarded like any other command.
///
/// # Errors
///
/// Same as [`forward_command`].
pub async fn forward_register_command(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, RelayError> {
    tracing::info!(command = "register", "command received");
    state.forwarder.forward("register").await
}

/// Command routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/{command}", get(forward_command))
}
