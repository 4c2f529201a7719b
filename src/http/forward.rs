//! Request forwarding to the upstream mock server.
//!
//! # Responsibilities
//! - Pick a `Prefer` value from the example registry
//! - Rebuild the request against the upstream base URL
//! - Send it through the shared connection pool
//! - Relay status and body untouched, minus hop-by-hop headers
//!
//! # Design Decisions
//! - One pooled client per process, cloned into every handler
//! - No retries: transport failures go straight back to the caller
//! - Response bodies are buffered so the relayed length is exact

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::HeaderValue;
use axum::http::{Request, Response, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::{TokioExecutor, TokioTimer};

use crate::config::UpstreamConfig;
use crate::error::ProxyError;
use crate::http::headers::{exclude_hop_by_hop, upstream_headers};
use crate::observability::metrics;
use crate::selection::{translate, ExampleRegistry};

/// Pooled HTTP client used for every upstream call.
pub type UpstreamClient = Client<HttpConnector, Body>;

/// A directive picked for a request and the header value it becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub directive: String,
    pub prefer: String,
}

#[derive(Clone)]
pub struct Forwarder {
    client: UpstreamClient,
    base_url: Arc<str>,
    registry: Arc<ExampleRegistry>,
}

impl Forwarder {
    /// Create a forwarder for `base_url` with a fresh connection pool.
    pub fn new(base_url: &str, upstream: &UpstreamConfig, registry: ExampleRegistry) -> Self {
        let mut builder = Client::builder(TokioExecutor::new());
        builder.pool_timer(TokioTimer::new());
        if let Some(secs) = upstream.pool_idle_timeout_secs {
            builder.pool_idle_timeout(Duration::from_secs(secs));
        }
        if let Some(max_idle) = upstream.pool_max_idle_per_host {
            builder.pool_max_idle_per_host(max_idle);
        }
        let client = builder.build(HttpConnector::new());

        Self {
            client,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            registry: Arc::new(registry),
        }
    }

    /// Look up the selection for a path + query. Directives that translate
    /// to nothing produce no selection.
    pub fn select(&self, path_and_query: &str) -> Option<Selection> {
        let directive = self.registry.lookup(path_and_query)?;
        let prefer = translate(directive);
        if prefer.is_empty() {
            tracing::debug!(directive, "Directive has no Prefer translation");
            return None;
        }
        Some(Selection {
            directive: directive.to_string(),
            prefer,
        })
    }

    /// The upstream URI for an incoming one: base URL followed by the
    /// incoming path and query.
    pub fn target_uri(&self, incoming: &Uri) -> Result<Uri, ProxyError> {
        let path_and_query = incoming
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let target = format!("{}{}", self.base_url, path_and_query);
        Uri::try_from(target).map_err(|e| ProxyError::InvalidTarget(e.into()))
    }

    /// Send `request` upstream and relay the response.
    pub async fn forward(&self, request: Request<Body>) -> Result<Response<Body>, ProxyError> {
        let (parts, body) = request.into_parts();
        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_default();

        let selection = self.select(path_and_query);
        let prefer = match &selection {
            Some(selection) => {
                tracing::info!(
                    path = %path_and_query,
                    directive = %selection.directive,
                    prefer = %selection.prefer,
                    "Example selected"
                );
                metrics::record_selection(&selection.directive);
                match HeaderValue::from_str(&selection.prefer) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(prefer = %selection.prefer, "Prefer value is not a valid header");
                        None
                    }
                }
            }
            None => None,
        };

        let uri = self.target_uri(&parts.uri)?;
        let mut upstream_request = Request::builder()
            .method(parts.method)
            .uri(uri)
            .body(body)?;
        *upstream_request.headers_mut() = upstream_headers(&parts.headers, prefer);

        let response = self.client.request(upstream_request).await?;

        let (parts, body) = response.into_parts();
        let bytes = axum::body::to_bytes(Body::new(body), usize::MAX).await?;

        let mut relayed = Response::new(Body::from(bytes));
        *relayed.status_mut() = parts.status;
        *relayed.headers_mut() = exclude_hop_by_hop(&parts.headers);
        Ok(relayed)
    }
}
