//! Prompt relay (v1)
//!
//! Accepts an authenticated POST carrying a short text prompt, escapes it, and
//! submits it as a job to the image-generation service.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                 PROMPT RELAY                  │
//!     Client POST        │  ┌────────┐   ┌──────────┐   ┌────────────┐  │
//!     ───────────────────┼─▶│  http  │──▶│ security │──▶│ forwarder  │  │
//!                        │  │ server │   │  auth    │   │  prompt    │  │
//!                        │  └────────┘   └──────────┘   └─────┬──────┘  │
//!                        │                                    ▼         │
//!     Client Response    │                             ┌────────────┐   │
//!     ◀──────────────────┼─────────────────────────────│  upstream  │◀──┼──── Image API
//!                        │                             │   client   │   │
//!                        │                             └────────────┘   │
//!                        │   config · observability · lifecycle         │
//!                        └──────────────────────────────────────────────┘
//! ```
//!
//! # Environment
//! - `RELAY_SECRET_TOKEN`: token callers present as `Authorization: Bearer <token>`
//! - `UPSTREAM_API_KEY`: key presented to the image API
//! - `PROMPT_RELAY_CONFIG`: optional path to a TOML config file
//! - `RUST_LOG`: overrides the configured log filter

use std::sync::Arc;

use tokio::net::TcpListener;

use prompt_relay::config::loader::load_from_env;
use prompt_relay::config::Secrets;
use prompt_relay::http::HttpServer;
use prompt_relay::lifecycle::{signals, Shutdown};
use prompt_relay::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_from_env()?;

    logging::init_logging(&config.observability);

    tracing::info!("prompt-relay v0.1.0 starting");

    let secrets = Secrets::from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.url,
        upstream_timeout_secs = config.upstream.timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Arc::new(Shutdown::new());
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    let server = HttpServer::new(config, secrets)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
