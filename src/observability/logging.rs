//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber
//! - Apply the configured default level
//! - Let `RUST_LOG` override everything for ad-hoc debugging

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the process-wide subscriber. Call once, before anything logs.
///
/// The configured level applies to this crate and the HTTP trace layer;
/// other crates stay quiet unless `RUST_LOG` says otherwise.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("article_edge={level},tower_http={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
