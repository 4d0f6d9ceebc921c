//! Service layer: outbound device communication.
//!
//! [`CommandForwarder`] resolves the destination host from the
//! [`super::domain::DeviceRegistry`] and relays device responses.

pub mod command_forwarder;

pub use command_forwarder::{CommandForwarder, DeviceResponse};
