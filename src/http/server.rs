//! HTTP server setup and the edge request handler.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all edge handler
//! - Wire up middleware (tracing)
//! - Bind to the listener and serve until shutdown is signalled
//! - Enforce the article prefix before anything touches the network
//! - Drive the forward / classify / respond pipeline per request

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::EdgeConfig;
use crate::http::response;
use crate::observability::metrics;
use crate::routing::RouteDecision;
use crate::upstream::{self, UpstreamClient, UpstreamError, UpstreamOutcome};

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

/// The article edge server: one route family, one upstream.
pub struct EdgeServer {
    router: Router,
}

impl EdgeServer {
    /// Build the server from configuration.
    ///
    /// Fails when the configured origin cannot back an upstream client, so a
    /// bad origin is caught at startup rather than on the first request.
    pub fn new(config: &EdgeConfig) -> Result<Self, UpstreamError> {
        let upstream = UpstreamClient::new(&config.upstream)?;
        tracing::info!(origin = %upstream.origin(), "upstream origin configured");

        let state = AppState { upstream };
        Ok(Self {
            router: build_router(state),
        })
    }

    /// The composed router, for serving or in-process exercise.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Accept connections until the shutdown channel fires, then drain
    /// in-flight requests and return.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "edge listening");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                // Both a signal and a dropped sender mean stop.
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("edge stopped");
        Ok(())
    }
}

/// Every path lands on the same handler; the prefix check happens inside it.
fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/{*path}", any(edge_handler))
        .route("/", any(edge_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// The single edge pipeline: filter, forward, classify, respond.
async fn edge_handler(State(state): State<AppState>, request: Request<Body>) -> Response<Body> {
    let start = Instant::now();
    let path = request.uri().path().to_string();
    let method = request.method().to_string();

    if let RouteDecision::Decline = RouteDecision::for_path(&path) {
        let response = response::outside_prefix();
        metrics::record_request(&method, response.status().as_u16(), "declined", start);
        return response;
    }

    tracing::debug!(method = %method, path = %path, "forwarding to origin");

    let outcome = upstream::classify(state.upstream.forward(request).await);
    if let UpstreamOutcome::Unreachable(error) = &outcome {
        tracing::error!(path = %path, error = %error, "origin unreachable");
    }

    let label = outcome.label();
    let response = response::respond(outcome, &path);
    metrics::record_request(&method, response.status().as_u16(), label, start);
    response
}
