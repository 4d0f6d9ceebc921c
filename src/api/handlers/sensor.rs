//! Sensor ingest and query endpoints.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::{MessageResponse, SensorDataRequest, decode_body};
use crate::app_state::AppState;
use crate::domain::SensorReading;
use crate::error::{ErrorResponse, RelayError};

/// `POST /sensor-data` — Replace the latest sensor snapshot.
///
/// # Errors
///
/// Returns [`RelayError::MissingField`] if any measurement is absent; the
/// stored snapshot is left untouched.
#[utoipa::path(
    post,
    path = "/sensor-data",
    tag = "Sensors",
    summary = "Ingest a sensor reading",
    description = "Stores temp, hum, co2 and voc with a server-assigned timestamp, replacing the previous reading.",
    request_body = SensorDataRequest,
    responses(
        (status = 200, description = "Reading stored", body = MessageResponse),
        (status = 400, description = "Measurement missing or body malformed", body = ErrorResponse),
    )
)]
pub async fn ingest_reading(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, RelayError> {
    let reading = decode_body::<SensorDataRequest>(&body)?.into_reading(Utc::now())?;
    tracing::debug!(?reading, "sensor reading received");
    state.readings.replace(reading).await;
    Ok(Json(MessageResponse::new("Data received successfully.")))
}

/// `GET /sensor-data` — Latest sensor snapshot.
///
/// # Errors
///
/// Returns [`RelayError::NotFound`] before the first reading arrives.
#[utoipa::path(
    get,
    path = "/sensor-data",
    tag = "Sensors",
    summary = "Latest sensor reading",
    responses(
        (status = 200, description = "Most recent reading", body = SensorReading),
        (status = 404, description = "No reading ingested yet", body = ErrorResponse),
    )
)]
pub async fn latest_reading(State(state): State<AppState>) -> Result<impl IntoResponse, RelayError> {
    Ok(Json(state.readings.latest().await?))
}

/// Sensor routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/sensor-data", get(latest_reading).post(ingest_reading))
}
