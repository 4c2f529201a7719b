//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Require an upstream base URL the client can reach over plain HTTP
//! - Validate the listener and metrics addresses
//! - Reject example tokens that would match every request
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::Uri;
use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("upstream base URL is not set (use UPSTREAM_HOST or [upstream].base_url)")]
    MissingUpstream,

    #[error("upstream base URL {url:?} is invalid: {reason}")]
    InvalidUpstream { url: String, reason: String },

    #[error("{field} {value:?} is not a valid socket address (expected IP:port, host names are not resolved)")]
    InvalidAddress { field: &'static str, value: String },

    #[error("example #{index} has an empty token")]
    EmptyToken { index: usize },
}

/// Check a parsed configuration.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.upstream.base_url.as_deref() {
        None => errors.push(ValidationError::MissingUpstream),
        Some(url) if url.trim().is_empty() => errors.push(ValidationError::MissingUpstream),
        Some(url) => {
            if let Err(reason) = check_upstream_url(url) {
                errors.push(ValidationError::InvalidUpstream {
                    url: url.to_string(),
                    reason,
                });
            }
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if let Some(entries) = &config.examples {
        for (index, entry) in entries.iter().enumerate() {
            if entry.token.is_empty() {
                errors.push(ValidationError::EmptyToken { index });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_upstream_url(raw: &str) -> Result<(), String> {
    // `Url` trims and percent-encodes silently; the forwarder builds
    // `Uri`s from the raw string, so that string must already be valid.
    raw.parse::<Uri>().map_err(|e| e.to_string())?;
    let url = Url::parse(raw).map_err(|e| e.to_string())?;

    if url.scheme() != "http" {
        return Err(format!("scheme {:?} is not supported, use http", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err("query and fragment are not allowed".to_string());
    }
    Ok(())
}
