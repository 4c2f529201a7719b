//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the health and proxy handlers
//! - Build the example registry and upstream connection pool once
//! - Wire up middleware (tracing)
//! - Serve until the shutdown signal fires

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::{validate_config, ConfigError, ProxyConfig, ValidationError};
use crate::http::forward::Forwarder;
use crate::http::health::{health_check, HEALTH_PATH};
use crate::http::request::request_id;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Forwarder,
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// The configuration is validated again here so a server can never be
    /// built without an upstream.
    pub fn new(config: ProxyConfig) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;
        let base_url = config
            .upstream
            .base_url
            .as_deref()
            .ok_or_else(|| ConfigError::Validation(vec![ValidationError::MissingUpstream]))?;

        let registry = config.registry();
        for shadowed in registry.shadowed() {
            let entries = registry.entries();
            tracing::warn!(
                token = %entries[shadowed.index].token,
                directive = %entries[shadowed.index].directive,
                shadowed_by = %entries[shadowed.shadowed_by].token,
                "Example entry can never match; an earlier token always wins"
            );
        }
        tracing::info!(
            upstream = %base_url,
            examples = registry.len(),
            "Example registry loaded"
        );

        let state = AppState {
            forwarder: Forwarder::new(base_url, &config.upstream, registry),
        };

        let router = Self::build_router(state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route(HEALTH_PATH, get(health_check))
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main proxy handler. Everything except the health path lands here.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match state.forwarder.forward(request).await {
        Ok(response) => {
            let status = response.status();
            metrics::record_request(method.as_str(), status.as_u16(), start_time);
            tracing::info!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = status.as_u16(),
                duration_ms = start_time.elapsed().as_millis() as u64,
                "Request forwarded"
            );
            response
        }
        Err(e) => {
            let status = e.status();
            metrics::record_request(method.as_str(), status.as_u16(), start_time);
            tracing::error!(
                request_id = %request_id,
                method = %method,
                path = %path,
                error = %e,
                "Upstream error"
            );
            e.into_response()
        }
    }
}
