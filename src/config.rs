//! Relay configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Unset or unparseable optional values
//! fall back to their defaults; only a malformed `LISTEN_ADDR` is fatal.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Port the relay listens on when neither `LISTEN_ADDR` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 5001;

/// Port the device serves its command endpoint on.
pub const DEFAULT_DEVICE_COMMAND_PORT: u16 = 8080;

/// Origins allowed to call the relay when `ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] =
    ["https://air-control.swansondev.me", "http://localhost:5173"];

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `LISTEN_ADDR` was set but is not a valid socket address.
    #[error("invalid LISTEN_ADDR {value:?}: {source}")]
    InvalidListenAddr {
        /// Raw value found in the environment.
        value: String,
        /// Underlying parse error.
        source: std::net::AddrParseError,
    },
}

/// Host that forwarded device commands are sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardTarget {
    /// Always use this fixed public host (NAT / port-forward deployment).
    /// The registered device address is informational only.
    PublicHost(String),
    /// Use whatever address the device last registered with.
    RegisteredAddress,
}

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Top-level relay configuration.
///
/// Loaded once at startup via [`RelayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:5001`).
    pub listen_addr: SocketAddr,

    /// Destination host policy for forwarded commands.
    pub forward_target: ForwardTarget,

    /// Port on the device that serves commands.
    pub device_port: u16,

    /// Upper bound on a single forwarded command round trip.
    pub forward_timeout: Duration,

    /// Origins permitted by the CORS layer.
    pub allowed_origins: Vec<String>,

    /// Log line format.
    pub log_format: LogFormat,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            forward_target: ForwardTarget::RegisteredAddress,
            device_port: DEFAULT_DEVICE_COMMAND_PORT,
            forward_timeout: Duration::from_secs(10),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl RelayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidListenAddr`] if `LISTEN_ADDR` is set
    /// but cannot be parsed as a [`SocketAddr`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`RelayConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidListenAddr { value, source })?,
            None => {
                let port = parse_value(lookup("PORT"), DEFAULT_PORT);
                SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port)
            }
        };

        let forward_target = match lookup("PUBLIC_IP").map(|v| v.trim().to_string()) {
            Some(host) if !host.is_empty() => ForwardTarget::PublicHost(host),
            _ => ForwardTarget::RegisteredAddress,
        };

        let device_port = parse_value(lookup("DEVICE_COMMAND_PORT"), defaults.device_port);
        let forward_timeout = Duration::from_secs(parse_value(
            lookup("FORWARD_TIMEOUT_SECS"),
            defaults.forward_timeout.as_secs(),
        ));

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| parse_list(&raw))
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.allowed_origins);

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            listen_addr,
            forward_target,
            device_port,
            forward_timeout,
            allowed_origins,
            log_format,
        })
    }
}

/// Parses an optional raw value as `T`, returning `default` on missing
/// or invalid values.
fn parse_value<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

/// Splits a comma-separated list, dropping blank entries.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
