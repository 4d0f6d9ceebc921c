//! Relay introspection DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Response body for `GET /relay/status`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RelayStatusResponse {
    /// Address the device last registered with.
    pub registered_address: Option<String>,
    /// Last status text pushed by the device.
    pub status: Option<String>,
    /// When the last status frame arrived.
    pub status_updated_at: Option<DateTime<Utc>>,
    /// Number of open status connections.
    pub connected_devices: usize,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: String,
    /// Current server time (RFC 3339).
    pub timestamp: String,
    /// Crate version.
    pub version: String,
}
