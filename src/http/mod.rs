//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, health route vs. catch-all)
//!     → request.rs (request ID for logs)
//!     → forward.rs (example selection, URI rewrite, pooled client)
//!     → headers.rs (drop Host, inject Prefer / strip hop-by-hop)
//!     → Send to client
//! ```

pub mod forward;
pub mod headers;
pub mod health;
pub mod request;
pub mod server;

pub use forward::{Forwarder, Selection};
pub use headers::{exclude_hop_by_hop, HOP_BY_HOP_HEADERS, PREFER};
pub use health::HEALTH_PATH;
pub use request::X_REQUEST_ID;
pub use server::HttpServer;
