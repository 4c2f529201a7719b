//! Example-selecting reverse proxy for a Prism mock server.
//!
//! Requests are forwarded unchanged to the upstream mock, except that a
//! `Prefer` header is injected when the path carries a known identifier, so
//! the mock answers with a fixed example or status-code scenario.

// Core subsystems
pub mod config;
pub mod error;
pub mod http;
pub mod selection;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use selection::{translate, ExampleRegistry, SelectionEntry};
