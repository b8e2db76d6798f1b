//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handler and upstream client produce:
//!     → logging.rs (structured log events, request ID attached)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape), when enabled
//! ```

pub mod logging;
pub mod metrics;
