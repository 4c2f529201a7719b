//! Request identification.
//!
//! # Responsibilities
//! - Reuse the caller's `x-request-id` when present
//! - Otherwise generate a UUID v4 for log correlation
//!
//! # Design Decisions
//! - The id only labels log lines; it is never added to the upstream
//!   request, which must carry the caller's headers unchanged

use axum::http::HeaderMap;
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";

pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
