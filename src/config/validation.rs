//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and the upstream URL
//! - Validate value ranges (timeouts > 0, body limit > 0)
//! - Keep the inbound timeout above the upstream one
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),

    #[error("upstream.url '{0}' is not an http(s) URL")]
    InvalidUpstreamUrl(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("timeouts.request_secs ({request}) must exceed upstream.timeout_secs ({upstream})")]
    TimeoutOrder { request: u64, upstream: u64 },
}

pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::InvalidUpstreamUrl(config.upstream.url.clone())),
    }

    let ranges = [
        ("upstream.timeout_secs", config.upstream.timeout_secs as usize),
        ("upstream.connect_timeout_secs", config.upstream.connect_timeout_secs as usize),
        ("timeouts.request_secs", config.timeouts.request_secs as usize),
        ("security.max_body_size", config.security.max_body_size),
    ];
    for (field, value) in ranges {
        if value == 0 {
            errors.push(ValidationError::Zero(field));
        }
    }

    // Otherwise the inbound timeout answers 408 before the upstream call can fail with 502.
    if config.timeouts.request_secs <= config.upstream.timeout_secs {
        errors.push(ValidationError::TimeoutOrder {
            request: config.timeouts.request_secs,
            upstream: config.upstream.timeout_secs,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
