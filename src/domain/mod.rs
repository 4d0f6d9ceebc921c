//! Domain layer: device identity, the three in-memory stores, and the
//! sensor snapshot type.
//!
//! Each store owns exactly one value and replaces it whole on write.

pub mod device_address;
pub mod device_registry;
pub mod device_status;
pub mod reading_store;
pub mod sensor_reading;

pub use device_address::DeviceAddress;
pub use device_registry::DeviceRegistry;
pub use device_status::{DeviceStatus, StatusStore};
pub use reading_store::ReadingStore;
pub use sensor_reading::SensorReading;
