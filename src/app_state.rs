//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::RelayConfig;
use crate::domain::{DeviceRegistry, ReadingStore, StatusStore};
use crate::service::CommandForwarder;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registered device address.
    pub registry: Arc<DeviceRegistry>,
    /// Latest sensor snapshot.
    pub readings: Arc<ReadingStore>,
    /// Status pushed over the status channel.
    pub status: StatusStore,
    /// Outbound command relay.
    pub forwarder: Arc<CommandForwarder>,
}

impl AppState {
    /// Builds empty stores and a forwarder wired to the same registry.
    ///
    /// # Errors
    ///
    /// Returns the [`reqwest::Error`] if the outbound HTTP client cannot
    /// be built.
    pub fn new(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        let registry = Arc::new(DeviceRegistry::new());
        let forwarder = Arc::new(CommandForwarder::new(Arc::clone(&registry), config)?);
        Ok(Self {
            registry,
            readings: Arc::new(ReadingStore::new()),
            status: StatusStore::new(),
            forwarder,
        })
    }
}
