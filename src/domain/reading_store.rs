//! Latest-reading store.
//!
//! Holds at most one [`SensorReading`]. Each accepted reading replaces the
//! previous one as a whole value under a single write lock, so a query can
//! never observe fields from two different readings.

use tokio::sync::RwLock;

use super::SensorReading;
use crate::error::RelayError;

/// Single-slot store for the most recent sensor snapshot.
#[derive(Debug, Default)]
pub struct ReadingStore {
    latest: RwLock<Option<SensorReading>>,
}

impl ReadingStore {
    /// Creates an empty store. Queries fail with
    /// [`RelayError::NotFound`] until the first reading arrives.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored snapshot with `reading`.
    pub async fn replace(&self, reading: SensorReading) {
        *self.latest.write().await = Some(reading);
    }

    /// Returns a copy of the latest snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::NotFound`] if no reading was ever stored.
    pub async fn latest(&self) -> Result<SensorReading, RelayError> {
        self.latest.read().await.clone().ok_or(RelayError::NotFound)
    }
}
