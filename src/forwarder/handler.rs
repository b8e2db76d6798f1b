//! The single forwarding endpoint.

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::forwarder::error::ForwardError;
use crate::forwarder::prompt::parse_prompt;
use crate::http::request::request_id_of;
use crate::http::server::AppState;
use crate::security::auth::authorize;
use crate::security::limits::read_limited;

/// Axum entry point: runs the pipeline and logs rejections.
pub async fn forward_prompt(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request_id_of(request.headers()).to_string();
    let method = request.method().clone();

    match handle(&state, request).await {
        Ok(job) => Json(job).into_response(),
        Err(e) => {
            tracing::debug!(
                request_id = %request_id,
                method = %method,
                status = %e.status(),
                error = %e,
                "Request rejected"
            );
            e.into_response()
        }
    }
}

/// Method check → auth → body parse → prompt validation → escape → upstream.
pub async fn handle(state: &AppState, request: Request<Body>) -> Result<Value, ForwardError> {
    if request.method() != Method::POST {
        return Err(ForwardError::MethodNotAllowed);
    }

    authorize(request.headers(), &state.secrets)?;

    let body = read_limited(request.into_body(), state.max_body_size).await?;

    let prompt = parse_prompt(&body)?;
    tracing::debug!(sanitized_len = prompt.as_str().len(), "Forwarding prompt upstream");

    state.upstream.submit(&prompt).await
}
