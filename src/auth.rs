use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Token carried by an `Authorization: Bearer <token>` header
///
/// Only the first space-separated word after the scheme counts as the token.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let rest = value.strip_prefix("Bearer ")?;
    rest.split(' ').next()
}

/// Middleware rejecting requests whose bearer token differs from the configured one
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let rejection = match bearer_token(request.headers()) {
        Some(token) if token == state.config.api_token => None,
        Some(_) => Some("invalid token"),
        None => Some("missing bearer token"),
    };

    match rejection {
        None => Ok(next.run(request).await),
        Some(reason) => {
            tracing::warn!("Rejected request to {}: {}", request.uri().path(), reason);
            Err(ApiError::Forbidden)
        }
    }
}
