//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Proxy handler and forwarder produce:
//!     → logging.rs (structured log events, request id per line)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
