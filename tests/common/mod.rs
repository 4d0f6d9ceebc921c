//! Shared helpers: fake device servers and relay construction.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use air_relay::api::build_app;
use air_relay::app_state::AppState;
use air_relay::config::{ForwardTarget, RelayConfig};
use axum::Router;
use axum::body::Body;
use axum::extract::Path;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use axum::routing::get;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// A device stand-in answering `GET /{command}` with `<name>:<command>`.
pub struct FakeDevice {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl FakeDevice {
    /// Number of requests the device has served.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Serves a fake device on an ephemeral local port.
///
/// `GET /fail` answers 503, `GET /slow` answers after three seconds;
/// every other single segment answers 200.
pub async fn spawn_device(name: &'static str) -> anyhow::Result<FakeDevice> {
    let hits = Arc::new(AtomicUsize::new(0));
    let ok_hits = Arc::clone(&hits);
    let fail_hits = Arc::clone(&hits);

    let app = Router::new()
        .route(
            "/fail",
            get(move || {
                let hits = Arc::clone(&fail_hits);
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    (StatusCode::SERVICE_UNAVAILABLE, "busy")
                }
            }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                "late"
            }),
        )
        .route(
            "/{command}",
            get(move |Path(command): Path<String>| {
                let hits = Arc::clone(&ok_hits);
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    (
                        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                        format!("{name}:{command}"),
                    )
                }
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(FakeDevice { addr, hits })
}

/// Returns a local address with nothing listening on it.
pub async fn closed_addr() -> anyhow::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(addr)
}

/// Relay configuration with a short forwarding timeout.
pub fn test_config(forward_target: ForwardTarget) -> RelayConfig {
    RelayConfig {
        forward_target,
        forward_timeout: Duration::from_secs(2),
        ..RelayConfig::default()
    }
}

/// Builds a relay router plus a handle on its state.
pub fn relay(config: &RelayConfig) -> anyhow::Result<(Router, AppState)> {
    let state = AppState::new(config)?;
    let app = build_app(state.clone(), config);
    Ok((app, state))
}

/// Sends one request through the router.
pub async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<Response> {
    Ok(app.clone().oneshot(request).await?)
}

/// `POST` with a JSON body.
pub fn post_json(uri: &str, body: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))?)
}

/// Plain `GET`.
pub fn get_request(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().uri(uri).body(Body::empty())?)
}

/// Collects a response into status and body text.
pub async fn read(response: Response) -> anyhow::Result<(StatusCode, String)> {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, String::from_utf8(bytes.to_vec())?))
}

/// Collects a response body as JSON.
pub async fn read_json(response: Response) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let (status, text) = read(response).await?;
    Ok((status, serde_json::from_str(&text)?))
}
