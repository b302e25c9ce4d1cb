//! # Token Authentication
//!
//! When a token is configured every request must carry
//! `Authentication: Token <token>`. Anything else is answered with a bare
//! 401 before it reaches a handler.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;

/// Header carrying the shared secret
pub const AUTH_HEADER: &str = "Authentication";

/// Expected header value for a configured token
#[derive(Debug, Clone)]
pub struct TokenAuth {
    expected: Arc<str>,
}

impl TokenAuth {
    pub fn new(token: &str) -> Self {
        Self {
            expected: Arc::from(format!("Token {}", token)),
        }
    }

    /// Constant-time check of the `Authentication` header
    pub fn accepts(&self, headers: &HeaderMap) -> bool {
        headers
            .get(AUTH_HEADER)
            .map(|value| bool::from(value.as_bytes().ct_eq(self.expected.as_bytes())))
            .unwrap_or(false)
    }
}

/// Middleware rejecting requests without the expected token
pub async fn require_token(
    State(auth): State<TokenAuth>,
    request: Request,
    next: Next,
) -> Response {
    if auth.accepts(request.headers()) {
        return next.run(request).await;
    }

    tracing::warn!(
        method = %request.method(),
        path = %request.uri().path(),
        "rejected request with missing or invalid token"
    );
    StatusCode::UNAUTHORIZED.into_response()
}
