//! Registration registry holding the single known device address.

use tokio::sync::RwLock;

use super::DeviceAddress;

/// Last-known address of the one device this relay serves.
///
/// Starts empty. Every [`DeviceRegistry::register`] call replaces the
/// stored address unconditionally; there is no expiry or handshake.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    address: RwLock<Option<DeviceAddress>>,
}

impl DeviceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `address`, returning the address it replaced, if any.
    pub async fn register(&self, address: DeviceAddress) -> Option<DeviceAddress> {
        self.address.write().await.replace(address)
    }

    /// Returns the current address, if a device has registered.
    pub async fn current(&self) -> Option<DeviceAddress> {
        self.address.read().await.clone()
    }
}
