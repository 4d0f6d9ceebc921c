//! Status channel tests over a real listening socket.

mod common;

use std::net::SocketAddr;
use std::time::Duration;

use air_relay::app_state::AppState;
use air_relay::config::ForwardTarget;
use futures_util::SinkExt;
use tokio::net::TcpListener;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use common::{relay, test_config};

async fn serve_relay() -> anyhow::Result<(SocketAddr, AppState)> {
    let (app, state) = relay(&test_config(ForwardTarget::RegisteredAddress))?;
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((addr, state))
}

async fn wait_for_status(state: &AppState, expected: &str) -> anyhow::Result<()> {
    let mut rx = state.status.subscribe();
    let wait = rx.wait_for(|s| s.as_ref().is_some_and(|s| s.text == expected));
    tokio::time::timeout(Duration::from_secs(5), wait).await??;
    Ok(())
}

async fn wait_for_connections(state: &AppState, expected: usize) -> anyhow::Result<()> {
    for _ in 0..250 {
        if state.status.connection_count() == expected {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    anyhow::bail!(
        "expected {expected} connections, found {}",
        state.status.connection_count()
    )
}

#[tokio::test]
async fn last_of_n_messages_wins() -> anyhow::Result<()> {
    let (addr, state) = serve_relay().await?;
    let (mut ws, _) = connect_async(format!("ws://{addr}/")).await?;

    for n in 1..=10 {
        ws.send(Message::text(format!("status {n}"))).await?;
    }
    wait_for_status(&state, "status 10").await?;

    assert_eq!(
        state.status.current().map(|s| s.text).as_deref(),
        Some("status 10")
    );
    Ok(())
}

#[tokio::test]
async fn upgrade_is_accepted_on_any_path() -> anyhow::Result<()> {
    let (addr, state) = serve_relay().await?;

    for path in ["/", "/sensor-data", "/device/status/feed"] {
        let (mut ws, _) = connect_async(format!("ws://{addr}{path}")).await?;
        let text = format!("hello from {path}");
        ws.send(Message::text(text.clone())).await?;
        wait_for_status(&state, &text).await?;
        ws.close(None).await?;
    }
    Ok(())
}

#[tokio::test]
async fn status_survives_disconnect() -> anyhow::Result<()> {
    let (addr, state) = serve_relay().await?;
    let (mut ws, _) = connect_async(format!("ws://{addr}/")).await?;
    wait_for_connections(&state, 1).await?;

    ws.send(Message::text("fan: high")).await?;
    wait_for_status(&state, "fan: high").await?;

    ws.close(None).await?;
    drop(ws);
    wait_for_connections(&state, 0).await?;

    assert_eq!(
        state.status.current().map(|s| s.text).as_deref(),
        Some("fan: high")
    );
    Ok(())
}

#[tokio::test]
async fn http_is_served_alongside_status_channel() -> anyhow::Result<()> {
    let (addr, state) = serve_relay().await?;
    let (mut ws, _) = connect_async(format!("ws://{addr}/")).await?;
    ws.send(Message::text("auto mode")).await?;
    wait_for_status(&state, "auto mode").await?;

    let body: serde_json::Value = reqwest::get(format!("http://{addr}/relay/status"))
        .await?
        .json()
        .await?;
    assert_eq!(body.get("status"), Some(&serde_json::json!("auto mode")));
    assert_eq!(body.get("connected_devices"), Some(&serde_json::json!(1)));
    Ok(())
}
