//! Shared DTO types and body decoding used across endpoints.

use axum::body::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::RelayError;

/// Plain acknowledgement body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable acknowledgement.
    pub message: String,
}

impl MessageResponse {
    /// Creates an acknowledgement with the given text.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Decodes a JSON request body, treating an empty body as `T::default()`.
///
/// Only JSON objects are accepted; fields are matched by name. The
/// `Content-Type` header is not inspected; devices on embedded HTTP
/// stacks do not always send one.
///
/// # Errors
///
/// Returns [`RelayError::InvalidRequest`] if a non-empty body is not
/// a JSON object valid for `T`.
pub fn decode_body<T>(body: &Bytes) -> Result<T, RelayError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let value: Value =
        serde_json::from_slice(body).map_err(|e| RelayError::InvalidRequest(e.to_string()))?;
    if !value.is_object() {
        return Err(RelayError::InvalidRequest("expected a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| RelayError::InvalidRequest(e.to_string()))
}
