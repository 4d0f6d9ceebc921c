//! Self-reported device network address.
//!
//! [`DeviceAddress`] is a newtype over the raw string the device sends on
//! registration. It is not validated as an IP or hostname; the only
//! invariant is that it is non-empty.

use std::fmt;
use std::net::{Ipv6Addr, SocketAddr};

use serde::Serialize;

/// Network address a device registered with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DeviceAddress(String);

impl DeviceAddress {
    /// Wraps a raw address, returning `None` if it is empty.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    /// Returns the raw address string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds a URL authority (`host:port`) for this address.
    ///
    /// An address that already carries a port is used as-is; a bare
    /// IPv6 address is bracketed.
    #[must_use]
    pub fn authority(&self, default_port: u16) -> String {
        authority(&self.0, default_port)
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds a `host:port` authority from a host that may already include a port.
#[must_use]
pub fn authority(host: &str, default_port: u16) -> String {
    if host.parse::<SocketAddr>().is_ok() {
        host.to_string()
    } else if host.parse::<Ipv6Addr>().is_ok() {
        format!("[{host}]:{default_port}")
    } else if has_port(host) {
        host.to_string()
    } else {
        format!("{host}:{default_port}")
    }
}

/// `true` for `name:1234` style hosts.
fn has_port(host: &str) -> bool {
    match host.rsplit_once(':') {
        Some((name, port)) => {
            !name.is_empty() && !name.contains(':') && port.parse::<u16>().is_ok()
        }
        None => false,
    }
}
