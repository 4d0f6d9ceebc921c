//! Relay error types with HTTP status code mapping.
//!
//! [`RelayError`] is the central error type for request handling. Each
//! variant maps to a specific HTTP status code and a flat JSON error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Client message for a registration without an address.
pub const MISSING_ADDRESS: &str = "IP address is required.";

/// Client message for a sensor reading with an absent measurement.
pub const MISSING_MEASUREMENTS: &str = "Temperature, humidity, CO2, and VOC are required.";

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// { "error": "IP address is required." }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant            | HTTP Status               |
/// |--------------------|---------------------------|
/// | `MissingField`     | 400 Bad Request           |
/// | `InvalidRequest`   | 400 Bad Request           |
/// | `NotRegistered`    | 400 Bad Request           |
/// | `NotFound`         | 404 Not Found             |
/// | `RouteNotFound`    | 404 Not Found             |
/// | `ForwardingFailed` | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// A required input field was absent or empty.
    #[error("{0}")]
    MissingField(&'static str),

    /// The request body could not be decoded.
    #[error("invalid request body: {0}")]
    InvalidRequest(String),

    /// A command was issued before any device registered.
    #[error("ESP32 IP is not registered.")]
    NotRegistered,

    /// The outbound call to the device failed.
    ///
    /// `reason` is logged but never sent to the client.
    #[error("Failed to send command to ESP32.")]
    ForwardingFailed {
        /// Underlying transport or status failure.
        reason: String,
    },

    /// No sensor reading has been ingested yet.
    #[error("No sensor data available.")]
    NotFound,

    /// No route matches the request path.
    #[error("route not found: {0}")]
    RouteNotFound(String),
}

impl RelayError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField(_) | Self::InvalidRequest(_) | Self::NotRegistered => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound | Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::ForwardingFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        if let Self::ForwardingFailed { reason } = &self {
            tracing::warn!(%reason, "command forwarding failed");
        }
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
