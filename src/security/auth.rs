use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::config::Secrets;
use crate::forwarder::ForwardError;

/// Accept the request only if `Authorization` is exactly `Bearer <shared token>`.
///
/// Comparison is on raw header bytes: no trimming, no case folding of the
/// scheme, and non-UTF-8 values simply fail to match.
pub fn authorize(headers: &HeaderMap, secrets: &Secrets) -> Result<(), ForwardError> {
    let auth_header = headers.get(AUTHORIZATION).map(|h| h.as_bytes());

    if let Some(auth_val) = auth_header {
        if auth_val == format!("Bearer {}", secrets.shared_token()).as_bytes() {
            return Ok(());
        }
    }

    Err(ForwardError::Unauthorized)
}
