//! Admin API key middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use sha2::{Digest, Sha256};

use crate::error::AppError;
use crate::AppState;

/// Hex-encoded SHA-256 of a key
pub fn hash_api_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Extract the API key from the Authorization header
fn extract_api_key(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Check a presented key against the configured one by digest
fn key_matches(presented: &str, expected: &str) -> bool {
    hash_api_key(presented) == hash_api_key(expected)
}

/// Guards the order administration routes.
///
/// With no `ADMIN_API_KEY` configured every request passes through.
pub async fn admin_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(expected) = state.config.admin_api_key.as_deref() {
        let presented = extract_api_key(&request).ok_or(AppError::Unauthorized)?;
        if !key_matches(presented, expected) {
            tracing::warn!(path = %request.uri().path(), "Rejected admin request with bad key");
            return Err(AppError::Unauthorized);
        }
    }

    Ok(next.run(request).await)
}
