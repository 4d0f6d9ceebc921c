//! Device registration DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::DeviceAddress;
use crate::error::{MISSING_ADDRESS, RelayError};

/// Request body for `POST /register`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Address the device can be reached at. Not validated.
    #[serde(default)]
    #[schema(example = "192.168.1.40")]
    pub ip: Option<String>,
}

impl RegisterRequest {
    /// Extracts the device address.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::MissingField`] if `ip` is absent, `null`, or empty.
    pub fn into_address(self) -> Result<DeviceAddress, RelayError> {
        self.ip
            .and_then(DeviceAddress::new)
            .ok_or(RelayError::MissingField(MISSING_ADDRESS))
    }
}
