//! OS signal handling.
//!
//! # Responsibilities
//! - Register handlers for SIGINT (ctrl-c) and SIGTERM
//! - Translate the first signal into a graceful shutdown
//!
//! # Design Decisions
//! - Tokio's async-safe signal handling, no raw handlers
//! - SIGTERM support is unix-only; elsewhere ctrl-c is the sole trigger

/// Resolve once the process is asked to stop.
pub async fn wait_for_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        let mut stream = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        stream.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("ctrl-c received"),
        _ = terminate => tracing::info!("SIGTERM received"),
    }
}
