//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the forwarding handler on every path
//! - Wire up middleware (tracing, timeout, metrics, request ID)
//! - Build the shared upstream client once
//! - Bind server to listener and shut down gracefully

use axum::{middleware, routing::any, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{RelayConfig, Secrets};
use crate::forwarder::{forward_prompt, ClientError, UpstreamClient};
use crate::http::request::MakeRelayRequestId;
use crate::observability::metrics::track_metrics;

/// Application state injected into handlers.
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub secrets: Arc<Secrets>,
    pub upstream: UpstreamClient,
    pub max_body_size: usize,
}

/// HTTP server for the prompt relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and credentials.
    pub fn new(config: RelayConfig, secrets: Secrets) -> Result<Self, ClientError> {
        let upstream = UpstreamClient::new(&config.upstream, &secrets)?;

        let state = AppState {
            secrets: Arc::new(secrets),
            upstream,
            max_body_size: config.security.max_body_size,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(forward_prompt))
            .route("/", any(forward_prompt))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::from_fn(track_metrics))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRelayRequestId))
    }

    /// Router with all layers, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires (or its sender is dropped).
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}
