//! WebSocket layer: the device status channel.
//!
//! Any WebSocket handshake on the listening port, whatever its path,
//! becomes a status connection.

pub mod connection;
pub mod handler;
