//! Outbound client for the image-generation service.
//!
//! # Responsibilities
//! - Build the job-submission payload
//! - Authenticate with the upstream API key
//! - Classify the outcome: JSON success, non-2xx passthrough, transport failure
//!
//! # Design Decisions
//! - One attempt per inbound request; no retries or backoff
//! - Timeouts come from `UpstreamConfig` and surface as transport failures
//! - The request future owns the connection, so dropping it releases the socket

use std::time::Duration;

use axum::http::{header::AUTHORIZATION, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::{Secrets, UpstreamConfig};
use crate::forwarder::error::ForwardError;
use crate::forwarder::prompt::SanitizedPrompt;
use crate::observability::metrics;

/// Diffusion steps requested for every job.
pub const STEPS: u32 = 30;

/// Errors raised while constructing an [`UpstreamClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("upstream API key is not a valid header value")]
    ApiKey,

    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Body posted to the upstream job endpoint.
#[derive(Debug, Serialize)]
pub struct OutboundPayload<'a> {
    input: JobInput<'a>,
}

#[derive(Debug, Serialize)]
struct JobInput<'a> {
    prompt: &'a SanitizedPrompt,
    steps: u32,
}

impl<'a> OutboundPayload<'a> {
    pub fn new(prompt: &'a SanitizedPrompt) -> Self {
        Self {
            input: JobInput { prompt, steps: STEPS },
        }
    }
}

/// HTTP client bound to one upstream endpoint and credential.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    url: Url,
    authorization: HeaderValue,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig, secrets: &Secrets) -> Result<Self, ClientError> {
        let url = Url::parse(&config.url)?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", secrets.api_key()))
            .map_err(|_| ClientError::ApiKey)?;
        authorization.set_sensitive(true);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url,
            authorization,
        })
    }

    /// Submit one job and return the upstream's JSON body on success.
    pub async fn submit(&self, prompt: &SanitizedPrompt) -> Result<Value, ForwardError> {
        let response = self
            .client
            .post(self.url.clone())
            .header(AUTHORIZATION, self.authorization.clone())
            .json(&OutboundPayload::new(prompt))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, timeout = e.is_timeout(), "Upstream unreachable");
                metrics::record_upstream_failure();
                ForwardError::Network
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(|e| {
                tracing::warn!(error = %e, status = %status, "Failed to read upstream error body");
                metrics::record_upstream_failure();
                ForwardError::Network
            })?;
            tracing::info!(status = %status, "Upstream rejected job");
            return Err(ForwardError::Upstream { status, body });
        }

        response.json::<Value>().await.map_err(|e| {
            tracing::warn!(error = %e, status = %status, "Upstream success body was not JSON");
            metrics::record_upstream_failure();
            ForwardError::Network
        })
    }
}
