//! Start a real server on an ephemeral port and shut it down.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use elixir_chess::{ServerConfig, ServerError};

#[tokio::test]
async fn serves_health_and_stops_on_shutdown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let config = ServerConfig {
        listen_addr: addr.to_string(),
        regen_interval: Duration::from_millis(20),
        ..Default::default()
    };

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(elixir_chess::server::serve(listener, config, async move {
        let _ = stop_rx.await;
    }));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.contains(r#""status":"ok""#), "{response}");

    stop_tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn invalid_config_is_rejected_before_binding() {
    let config = ServerConfig {
        regen_interval: Duration::ZERO,
        ..Default::default()
    };

    let err = elixir_chess::server::run(config, std::future::pending())
        .await
        .unwrap_err();
    assert!(matches!(err, ServerError::InvalidConfig { .. }), "{err:?}");
}

#[tokio::test]
async fn occupied_address_reports_bind_error() {
    let holder = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let config = ServerConfig {
        listen_addr: holder.local_addr().unwrap().to_string(),
        ..Default::default()
    };

    let err = elixir_chess::server::run(config, std::future::pending())
        .await
        .unwrap_err();
    assert!(matches!(err, ServerError::Bind { .. }), "{err:?}");
}
