//! Upstream fetch subsystem.
//!
//! # Responsibilities
//! - Hold the single reusable client bound to the configured origin
//! - Rewrite inbound requests onto the origin authority
//! - Classify each round trip into one of three outcomes
//!
//! # Data Flow
//! ```text
//! Request -> UpstreamClient::forward -> Result<Response, UpstreamError>
//!                                           |
//!                                       classify
//!                                           v
//!                              Relay | Missing | Unreachable
//! ```
//!
//! The classification is the one place upstream status codes get meaning.
//! Everything downstream (response shaping, logs, metrics) branches on
//! [`UpstreamOutcome`], never on raw status codes.

pub mod client;

pub use client::{UpstreamClient, UpstreamError};

use reqwest::StatusCode;

/// What became of a single upstream round trip.
#[derive(Debug)]
pub enum UpstreamOutcome {
    /// The origin answered with anything other than 404. Status, headers,
    /// and body are relayed to the client.
    Relay(reqwest::Response),
    /// The origin reported 404. Its response body is discarded and a
    /// branded page takes its place.
    Missing,
    /// The call itself failed; there is no origin response to draw on.
    Unreachable(UpstreamError),
}

impl UpstreamOutcome {
    /// Stable outcome label shared by logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            UpstreamOutcome::Relay(_) => "relayed",
            UpstreamOutcome::Missing => "missing",
            UpstreamOutcome::Unreachable(_) => "unreachable",
        }
    }
}

/// Sort the result of an upstream call into its outcome.
///
/// All transport failures collapse into [`UpstreamOutcome::Unreachable`]:
/// a DNS miss, a refused connection, and a mid-handshake hangup are the
/// same situation from the client's point of view.
pub fn classify(result: Result<reqwest::Response, UpstreamError>) -> UpstreamOutcome {
    match result {
        Err(error) => UpstreamOutcome::Unreachable(error),
        Ok(response) if response.status() == StatusCode::NOT_FOUND => UpstreamOutcome::Missing,
        Ok(response) => UpstreamOutcome::Relay(response),
    }
}
