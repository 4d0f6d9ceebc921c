//! REST endpoint handlers organized by resource.

pub mod command;
pub mod register;
pub mod sensor;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(register::routes())
        .merge(sensor::routes())
        .merge(system::routes())
        .merge(command::routes())
}
