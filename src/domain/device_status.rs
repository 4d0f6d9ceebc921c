//! Device status published over the status channel.
//!
//! [`StatusStore`] wraps a [`tokio::sync::watch`] channel: writers replace
//! the whole [`DeviceStatus`] value, readers either borrow the latest value
//! or subscribe to be woken on every change.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use utoipa::ToSchema;

/// Latest free-form status text pushed by the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DeviceStatus {
    /// Raw text of the last status frame.
    pub text: String,
    /// When the relay received the frame.
    pub received_at: DateTime<Utc>,
}

/// Shared handle to the current device status.
///
/// Cheap to clone; all clones observe the same value.
#[derive(Debug, Clone)]
pub struct StatusStore {
    sender: Arc<watch::Sender<Option<DeviceStatus>>>,
    connections: Arc<AtomicUsize>,
}

impl StatusStore {
    /// Creates a store with no status recorded.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
            connections: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Overwrites the current status with `text`.
    pub fn update(&self, text: impl Into<String>) {
        let status = DeviceStatus {
            text: text.into(),
            received_at: Utc::now(),
        };
        self.sender.send_replace(Some(status));
    }

    /// Returns a copy of the current status, if any frame has arrived.
    #[must_use]
    pub fn current(&self) -> Option<DeviceStatus> {
        self.sender.borrow().clone()
    }

    /// Creates a receiver that is notified on every status change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<DeviceStatus>> {
        self.sender.subscribe()
    }

    /// Records a newly opened status connection.
    ///
    /// The count drops again when the returned guard is dropped.
    #[must_use]
    pub fn connection_opened(&self) -> ConnectionGuard {
        self.connections.fetch_add(1, Ordering::SeqCst);
        ConnectionGuard {
            connections: Arc::clone(&self.connections),
        }
    }

    /// Number of currently open status connections.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

impl Default for StatusStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps a status connection counted while alive.
#[derive(Debug)]
pub struct ConnectionGuard {
    connections: Arc<AtomicUsize>,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.connections.fetch_sub(1, Ordering::SeqCst);
    }
}
