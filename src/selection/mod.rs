//! Example selection subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming path + query
//!     → registry.rs (ordered substring scan, first match wins)
//!     → directive.rs (directive → Prefer header value)
//!     → Forwarder sets `Prefer` on the upstream request
//!
//! Registry construction (at startup):
//!     builtin.rs table, or [[examples]] from config
//!     → ExampleRegistry (immutable, shared via Arc)
//! ```
//!
//! # Design Decisions
//! - Entries are an explicit ordered sequence, never a hash map
//! - Tokens match as raw substrings, no segment boundaries
//! - Unknown directive shapes degrade to "no header", never an error

pub mod builtin;
pub mod directive;
pub mod registry;

pub use directive::translate;
pub use registry::{ExampleRegistry, SelectionEntry};
