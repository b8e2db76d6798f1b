//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::time::Duration;
use std::future::Future;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

use prompt_relay::config::{RelayConfig, Secrets};
use prompt_relay::http::HttpServer;
use prompt_relay::lifecycle::Shutdown;

pub const TOKEN: &str = "caller-secret";
pub const API_KEY: &str = "upstream-key";

/// What the mock upstream saw for one request.
#[derive(Debug)]
#[allow(dead_code)]
pub struct CapturedRequest {
    /// Request line and headers, lowercased.
    pub head: String,
    pub body: String,
}

impl CapturedRequest {
    #[allow(dead_code)]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Start a mock upstream that answers every request with `status` and `body`.
#[allow(dead_code)]
pub async fn start_mock_upstream(
    status: u16,
    body: &'static str,
) -> (SocketAddr, mpsc::UnboundedReceiver<CapturedRequest>) {
    start_programmable_upstream(move || async move { (status, body.to_string()) }).await
}

/// Start a programmable mock upstream with async support.
pub async fn start_programmable_upstream<F, Fut>(
    f: F,
) -> (SocketAddr, mpsc::UnboundedReceiver<CapturedRequest>)
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = std::sync::Arc::new(f);
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let Some(captured) = read_request(&mut socket).await else {
                            return;
                        };
                        let _ = tx.send(captured);

                        let (status, body) = f().await;
                        let response_str = format!(
                            "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, rx)
}

async fn read_request(socket: &mut TcpStream) -> Option<CapturedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body = String::from_utf8_lossy(&buf[header_end..]).into_owned();
    Some(CapturedRequest { head, body })
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Start the relay against `upstream_url`; the server stops when the returned
/// coordinator is triggered or dropped.
pub async fn start_relay(upstream_url: String) -> (SocketAddr, Shutdown) {
    let mut config = RelayConfig::default();
    config.upstream.url = upstream_url;
    config.upstream.timeout_secs = 5;
    config.upstream.connect_timeout_secs = 2;

    let server = HttpServer::new(config, Secrets::new(TOKEN, API_KEY)).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}
