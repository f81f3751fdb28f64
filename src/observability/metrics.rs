//! Metrics collection and exposition.
//!
//! # Metrics
//! - `edge_requests_total` (counter): handled requests by method, status,
//!   and outcome (`declined`, `relayed`, `missing`, `unreachable`)
//! - `edge_request_duration_seconds` (histogram): end-to-end edge latency
//!
//! # Design Decisions
//! - The `metrics` facade keeps call sites cheap; with no recorder
//!   installed every macro is a no-op, so handlers never pay for a
//!   disabled exporter
//! - Outcome labels mirror the log vocabulary so dashboards and log
//!   queries line up

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must run inside the tokio runtime; the exposition endpoint is served on
/// a background task.
pub fn init_metrics(address: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new()
        .with_http_listener(address)
        .install()?;

    describe_counter!(
        "edge_requests_total",
        "Requests handled by the edge, by method, status, and outcome"
    );
    describe_histogram!(
        "edge_request_duration_seconds",
        "End-to-end edge handling latency in seconds"
    );

    tracing::info!(address = %address, "metrics exporter listening");
    Ok(())
}

/// Record one handled request, whatever its outcome.
pub fn record_request(method: &str, status: u16, outcome: &str, started: Instant) {
    counter!(
        "edge_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "outcome" => outcome.to_string()
    )
    .increment(1);
    histogram!(
        "edge_request_duration_seconds",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "outcome" => outcome.to_string()
    )
    .record(started.elapsed().as_secs_f64());
}
