//! air-relay server entry point.
//!
//! Starts the Axum HTTP server with REST endpoints and the status channel.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use air_relay::api;
use air_relay::app_state::AppState;
use air_relay::config::{ForwardTarget, LogFormat, RelayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = RelayConfig::from_env().context("failed to load configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    match &config.forward_target {
        ForwardTarget::PublicHost(host) => {
            tracing::info!(%host, port = config.device_port, "forwarding commands to public host");
        }
        ForwardTarget::RegisteredAddress => {
            tracing::info!(port = config.device_port, "forwarding commands to registered address");
        }
    }

    // Build application state and router
    let state = AppState::new(&config).context("failed to build device HTTP client")?;
    let app = api::build_app(state, &config);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
