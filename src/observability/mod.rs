//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! client/, loaders/, host/ produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters via the metrics facade)
//!
//! Consumers:
//!     → stderr (fmt layer)
//!     → whatever metrics recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - Structured fields, never raw session data
//! - Metrics are recorder-agnostic; nothing is exported by this crate
//! - Log level from config, overridable with RUST_LOG

pub mod logging;
pub mod metrics;
