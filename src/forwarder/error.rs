//! Error taxonomy for a single forwarding pass.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Every way a forwarding pass can end without a successful upstream JSON body.
///
/// All variants are terminal for the request; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unauthorized")]
    Unauthorized,

    /// Body absent, empty, unreadable or not well-formed JSON.
    #[error("Invalid JSON")]
    InvalidJson,

    /// `prompt` present but not a string.
    #[error("Prompt must be a string")]
    InvalidType,

    #[error("Prompt too long")]
    PromptTooLong,

    /// The upstream call could not be completed.
    #[error("Network error: Unable to reach upstream")]
    Network,

    /// Upstream answered with a non-success status; forwarded verbatim.
    #[error("upstream responded with {status}")]
    Upstream { status: StatusCode, body: String },
}

impl ForwardError {
    pub fn status(&self) -> StatusCode {
        match self {
            ForwardError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ForwardError::Unauthorized => StatusCode::UNAUTHORIZED,
            ForwardError::InvalidJson
            | ForwardError::InvalidType
            | ForwardError::PromptTooLong => StatusCode::BAD_REQUEST,
            ForwardError::Network => StatusCode::BAD_GATEWAY,
            ForwardError::Upstream { status, .. } => *status,
        }
    }
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ForwardError::Upstream { body, .. } => (status, body).into_response(),
            other => (status, other.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn status_codes_map_correctly() {
        assert_eq!(ForwardError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ForwardError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ForwardError::InvalidJson.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ForwardError::InvalidType.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ForwardError::PromptTooLong.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ForwardError::Network.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn upstream_error_forwards_status_and_body_verbatim() {
        let err = ForwardError::Upstream {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: "slow down".to_owned(),
        };
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body_text(resp).await, "slow down");
    }

    #[tokio::test]
    async fn network_error_has_fixed_body() {
        let resp = ForwardError::Network.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_text(resp).await, "Network error: Unable to reach upstream");
    }
}
