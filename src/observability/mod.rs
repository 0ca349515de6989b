//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the forwarder produce:
//!     → logging.rs (structured log events, request ID in every span)
//!     → metrics.rs (counters and histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape on the metrics listener, when enabled
//! ```
//!
//! # Design Decisions
//! - Metric calls are no-ops until a recorder is installed
//! - API keys are never part of a log field or metric label

pub mod logging;
pub mod metrics;
