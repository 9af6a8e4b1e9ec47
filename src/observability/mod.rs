//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! store calls produce:
//!     → logging.rs (structured log events, stderr)
//!     → metrics.rs (request counters and latency histograms)
//!
//! Correlation:
//!     → each store call runs in a span carrying its x-request-id
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr so command output on stdout stays pipeable
//! - Metrics go through the `metrics` facade; without an installed recorder
//!   they cost nothing

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
