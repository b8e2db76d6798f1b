//! Request size limits.
//!
//! # Responsibilities
//! - Enforce maximum request body size
//!
//! # Design Decisions
//! - Enforced while reading the body inside the handler, after the method and
//!   auth checks, so oversized requests never mask a 405 or 401
//! - A body over the limit cannot be parsed and is reported as invalid JSON

use axum::body::{Body, Bytes};

use crate::forwarder::ForwardError;

/// Buffer at most `max_body_size` bytes of `body`.
pub async fn read_limited(body: Body, max_body_size: usize) -> Result<Bytes, ForwardError> {
    axum::body::to_bytes(body, max_body_size).await.map_err(|e| {
        tracing::debug!(error = %e, max_body_size, "Request body unreadable or over limit");
        ForwardError::InvalidJson
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn body_within_limit_is_returned() {
        let bytes = read_limited(Body::from("{\"prompt\":\"hi\"}"), 64).await.unwrap();
        assert_eq!(&bytes[..], b"{\"prompt\":\"hi\"}");
    }

    #[tokio::test]
    async fn body_over_limit_is_invalid_json() {
        let result = read_limited(Body::from("x".repeat(65)), 64).await;
        assert!(matches!(result, Err(ForwardError::InvalidJson)));
    }
}
