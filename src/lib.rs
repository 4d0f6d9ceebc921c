//! # air-relay
//!
//! HTTP and WebSocket relay between an ESP32 air-quality controller and
//! its web client.
//!
//! The device registers its address, posts sensor readings, and pushes
//! status text over a WebSocket. The web client reads the latest reading
//! and sends commands, which are forwarded to the device over HTTP. All
//! state is in memory and covers a single device.
//!
//! ## Architecture
//!
//! ```text
//! Web client (HTTP)          Device (HTTP, WebSocket)
//!     │                          │
//!     ├── REST Handlers (api/)   ├── Status upgrade (ws/)
//!     │                          │
//!     ├── CommandForwarder (service/) ──► Device HTTP endpoint
//!     │
//!     └── DeviceRegistry / ReadingStore / StatusStore (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;
