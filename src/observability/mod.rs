//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (request counter + latency histogram)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - One shared outcome vocabulary across logs and metric labels
//! - Metric updates are cheap atomic operations behind the facade
//! - The exporter is optional; the edge works identically without it

pub mod logging;
pub mod metrics;
