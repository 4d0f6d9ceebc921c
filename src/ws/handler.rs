//! Axum WebSocket upgrade middleware.
//!
//! The device may open its status socket on any path, so the upgrade is
//! handled as middleware in front of the router instead of as a route.

use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{FromRequestParts, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::connection::run_connection;
use crate::app_state::AppState;

/// Upgrades any valid WebSocket handshake to a status connection and
/// passes every other request on to the router.
pub async fn status_upgrade(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let (mut parts, body) = request.into_parts();
    match WebSocketUpgrade::from_request_parts(&mut parts, &state).await {
        Ok(ws) => {
            let path = parts.uri.path().to_string();
            let status = state.status.clone();
            ws.on_upgrade(move |socket| run_connection(socket, status, path))
                .into_response()
        }
        Err(_) => next.run(Request::from_parts(parts, body)).await,
    }
}
