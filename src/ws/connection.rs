//! Status connection read loop.
//!
//! The device pushes free-form status text; each text frame replaces the
//! stored [`crate::domain::DeviceStatus`]. Nothing is sent back.

use axum::extract::ws::{Message, WebSocket};
use futures_util::StreamExt;

use crate::domain::StatusStore;

/// Runs the read loop for a single status connection until the peer
/// closes or the transport fails.
pub async fn run_connection(mut socket: WebSocket, status: StatusStore, path: String) {
    let connection_id = uuid::Uuid::new_v4();
    let _guard = status.connection_opened();
    tracing::info!(%connection_id, %path, "status connection established with device");

    while let Some(msg) = socket.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                tracing::debug!(%connection_id, status = %text.as_str(), "device status received");
                status.update(text.as_str());
            }
            Ok(Message::Binary(bytes)) => {
                tracing::debug!(%connection_id, len = bytes.len(), "ignoring binary frame");
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(%connection_id, error = %e, "status connection error");
                break;
            }
        }
    }

    tracing::info!(%connection_id, "status connection closed");
}
