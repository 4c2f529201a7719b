//! Header manipulation.
//!
//! # Responsibilities
//! - Strip hop-by-hop headers from upstream responses
//! - Build the headers sent upstream (drop `Host`, inject `Prefer`)
//!
//! # Design Decisions
//! - Header names compare case-insensitively (`HeaderName` is lowercase)
//! - Relative order and duplicate values survive filtering
//! - Request headers are never hop-by-hop filtered

use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};

/// Headers meaningful only for a single transport connection. They are not
/// relayed from the upstream response to the caller (RFC 2616 §13.5.1).
pub const HOP_BY_HOP_HEADERS: &[&str] = &[
    "connection",
    "content-encoding",
    "content-length",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailers",
    "transfer-encoding",
    "upgrade",
];

/// Header the mock server reads its example/status selection from.
pub const PREFER: HeaderName = HeaderName::from_static("prefer");

pub fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP_HEADERS
        .iter()
        .any(|hop| hop.eq_ignore_ascii_case(name))
}

/// Copy `headers` without any hop-by-hop entries.
pub fn exclude_hop_by_hop(headers: &HeaderMap) -> HeaderMap {
    let mut filtered = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers.iter() {
        if !is_hop_by_hop(name.as_str()) {
            filtered.append(name.clone(), value.clone());
        }
    }
    filtered
}

/// Headers for the upstream request: everything the caller sent except
/// `Host`, with `Prefer` replaced when a selection value is given.
pub fn upstream_headers(incoming: &HeaderMap, prefer: Option<HeaderValue>) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(incoming.len() + 1);
    for (name, value) in incoming.iter() {
        if name != header::HOST {
            headers.append(name.clone(), value.clone());
        }
    }
    if let Some(prefer) = prefer {
        headers.insert(PREFER, prefer);
    }
    headers
}
