//! Sensor snapshot as reported by the device.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// One complete air-quality snapshot.
///
/// Measurement values are kept exactly as the device sent them: presence
/// is required, the JSON type is not checked. `observed_at` is assigned by
/// the relay when the reading is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SensorReading {
    /// Temperature.
    #[serde(rename = "temp")]
    #[schema(value_type = f64, example = 22.5)]
    pub temperature: Value,

    /// Relative humidity.
    #[serde(rename = "hum")]
    #[schema(value_type = f64, example = 40)]
    pub humidity: Value,

    /// CO2 concentration.
    #[schema(value_type = f64, example = 410)]
    pub co2: Value,

    /// Volatile organic compound index.
    #[schema(value_type = f64, example = 12)]
    pub voc: Value,

    /// Server-side capture time.
    #[serde(rename = "timestamp")]
    pub observed_at: DateTime<Utc>,
}

impl SensorReading {
    /// Builds a reading from its four measurements, stamped `observed_at`.
    #[must_use]
    pub fn new(
        temperature: Value,
        humidity: Value,
        co2: Value,
        voc: Value,
        observed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            temperature,
            humidity,
            co2,
            voc,
            observed_at,
        }
    }
}
