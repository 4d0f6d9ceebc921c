//! Device registration endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use super::command::forward_register_command;
use crate::api::dto::{MessageResponse, RegisterRequest, decode_body};
use crate::app_state::AppState;
use crate::domain::DeviceAddress;
use crate::error::{ErrorResponse, RelayError};

/// `POST /register` — Record the device address.
///
/// # Errors
///
/// Returns [`RelayError::MissingField`] if `ip` is missing or empty, or
/// [`RelayError::InvalidRequest`] if the body is not valid JSON.
#[utoipa::path(
    post,
    path = "/register",
    tag = "Device",
    summary = "Register the device",
    description = "Stores the address the device reports. Any previous registration is replaced.",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Device registered", body = MessageResponse),
        (status = 400, description = "Address missing or body malformed", body = ErrorResponse),
    )
)]
pub async fn register_device(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, RelayError> {
    let address = decode_body::<RegisterRequest>(&body)?.into_address()?;
    let previous = state.registry.register(address.clone()).await;

    tracing::info!(
        %address,
        previous = previous.as_ref().map(DeviceAddress::as_str),
        "device registered"
    );
    Ok(Json(MessageResponse::new("ESP32 registered successfully.")))
}

/// Registration routes. `GET /register` is a device command like any
/// other single segment.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/register",
        post(register_device).get(forward_register_command),
    )
}
