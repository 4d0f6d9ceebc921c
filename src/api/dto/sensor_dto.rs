//! Sensor ingest DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::SensorReading;
use crate::error::{MISSING_MEASUREMENTS, RelayError};

/// Request body for `POST /sensor-data`.
///
/// All four fields are required. Presence is checked; the JSON type of
/// each value is not. An explicit `null` is present and kept as-is.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SensorDataRequest {
    /// Temperature.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>, example = 22.5)]
    pub temp: Option<Value>,
    /// Relative humidity.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>, example = 40)]
    pub hum: Option<Value>,
    /// CO2 concentration.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>, example = 410)]
    pub co2: Option<Value>,
    /// Volatile organic compound index.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>, example = 12)]
    pub voc: Option<Value>,
}

/// Marks any value found under the key as present, `null` included.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl SensorDataRequest {
    /// Converts the payload into a reading stamped `observed_at`.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::MissingField`] if any measurement is absent.
    pub fn into_reading(self, observed_at: DateTime<Utc>) -> Result<SensorReading, RelayError> {
        match (self.temp, self.hum, self.co2, self.voc) {
            (Some(temp), Some(hum), Some(co2), Some(voc)) => {
                Ok(SensorReading::new(temp, hum, co2, voc, observed_at))
            }
            _ => Err(RelayError::MissingField(MISSING_MEASUREMENTS)),
        }
    }
}
