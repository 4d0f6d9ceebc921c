//! Command forwarder: relays a client command to the device over HTTP.

use std::sync::Arc;

use axum::body::Bytes;
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use reqwest::Url;

use crate::config::{ForwardTarget, RelayConfig};
use crate::domain::device_address::authority;
use crate::domain::{DeviceAddress, DeviceRegistry};
use crate::error::RelayError;

/// Body and content type returned by the device, relayed unchanged.
#[derive(Debug, Clone)]
pub struct DeviceResponse {
    /// Device `Content-Type`, if it sent one.
    pub content_type: Option<HeaderValue>,
    /// Raw response body.
    pub body: Bytes,
}

impl IntoResponse for DeviceResponse {
    fn into_response(self) -> Response {
        match self.content_type {
            Some(content_type) => ([(header::CONTENT_TYPE, content_type)], self.body).into_response(),
            None => self.body.into_response(),
        }
    }
}

/// Forwards single-segment commands to the registered device.
///
/// Every call is an independent `GET http://<host>:<port>/<command>`
/// bounded by the configured timeout. Nothing is retried or queued.
#[derive(Debug, Clone)]
pub struct CommandForwarder {
    client: reqwest::Client,
    registry: Arc<DeviceRegistry>,
    target: ForwardTarget,
    device_port: u16,
}

impl CommandForwarder {
    /// Creates a forwarder reading the device address from `registry`.
    ///
    /// # Errors
    ///
    /// Returns the [`reqwest::Error`] if the HTTP client cannot be built.
    pub fn new(registry: Arc<DeviceRegistry>, config: &RelayConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.forward_timeout)
            .build()?;
        Ok(Self {
            client,
            registry,
            target: config.forward_target.clone(),
            device_port: config.device_port,
        })
    }

    /// Builds the outbound URL for `command`.
    ///
    /// `command` always becomes exactly one percent-encoded path segment.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::ForwardingFailed`] if the destination host
    /// does not form a valid URL, or carries a path, query, fragment, or
    /// credentials that would move the command elsewhere.
    pub fn command_url(&self, address: &DeviceAddress, command: &str) -> Result<Url, RelayError> {
        let authority = match &self.target {
            ForwardTarget::PublicHost(host) => authority(host, self.device_port),
            ForwardTarget::RegisteredAddress => address.authority(self.device_port),
        };
        let mut url = Url::parse(&format!("http://{authority}/")).map_err(|e| {
            RelayError::ForwardingFailed {
                reason: format!("invalid device url for {authority}: {e}"),
            }
        })?;
        if !is_bare_origin(&url, &authority) {
            return Err(RelayError::ForwardingFailed {
                reason: format!("device address {authority} is not a plain host"),
            });
        }
        url.path_segments_mut()
            .map_err(|()| RelayError::ForwardingFailed {
                reason: format!("device url {authority} cannot carry a path"),
            })?
            .pop_if_empty()
            .push(command);
        Ok(url)
    }

    /// Forwards `command` and returns the device response.
    ///
    /// # Errors
    ///
    /// - [`RelayError::NotRegistered`] if no device has registered; no
    ///   outbound request is made.
    /// - [`RelayError::ForwardingFailed`] on transport error, timeout, or a
    ///   non-success status from the device.
    pub async fn forward(&self, command: &str) -> Result<DeviceResponse, RelayError> {
        let Some(address) = self.registry.current().await else {
            tracing::error!(command, "command received but no device is registered");
            return Err(RelayError::NotRegistered);
        };

        let url = self.command_url(&address, command)?;
        tracing::info!(command, %address, %url, "forwarding command to device");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(forwarding_failed)?;

        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response.bytes().await.map_err(forwarding_failed)?;
        tracing::debug!(command, bytes = body.len(), "device responded");

        Ok(DeviceResponse { content_type, body })
    }
}

/// `true` if `url` is exactly `http://<host>:<port>/` for `authority`.
fn is_bare_origin(url: &Url, authority: &str) -> bool {
    let expected_port = authority
        .rsplit_once(':')
        .and_then(|(_, port)| port.parse::<u16>().ok());
    url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none()
        && url.username().is_empty()
        && url.password().is_none()
        && url.host_str().is_some()
        && url.port_or_known_default() == expected_port
}

fn forwarding_failed(err: reqwest::Error) -> RelayError {
    let reason = if err.is_timeout() {
        format!("timed out: {err}")
    } else {
        err.to_string()
    };
    RelayError::ForwardingFailed { reason }
}
