//! Errors raised while forwarding a request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur while proxying a single request.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The upstream URI could not be assembled from the incoming request.
    #[error("Invalid upstream URI: {0}")]
    InvalidTarget(#[from] axum::http::Error),

    /// Connecting to or talking with the upstream failed.
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),

    /// The upstream response body could not be read.
    #[error("Failed to read upstream body: {0}")]
    Body(#[from] axum::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::InvalidTarget(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Upstream(_) | ProxyError::Body(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
