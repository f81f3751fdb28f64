//! Article edge proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────┐
//!   Client Request     │           ARTICLE EDGE           │
//!   ──────────────────▶│  routing ──▶ upstream ──▶ origin │
//!                      │     │             │              │
//!                      │  declined     classified         │
//!                      │     ▼             ▼              │
//!   Client Response    │  plain 404    relay or branded   │
//!   ◀──────────────────│               page               │
//!                      ├──────────────────────────────────┤
//!                      │config · observability · lifecycle│
//!                      └──────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use article_edge::config::{load_config, EdgeConfig};
use article_edge::http::EdgeServer;
use article_edge::lifecycle::{signals, Shutdown};
use article_edge::observability::{logging, metrics};

#[derive(Parser, Debug)]
#[command(name = "article-edge", version, about = "Single-route article edge proxy")]
struct Cli {
    /// Path to the TOML configuration file. Built-in defaults apply when omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Config comes first: the log level lives in it.
    let config = match &cli.config {
        Some(path) => load_config(path).unwrap_or_else(|error| {
            eprintln!("cannot load configuration: {error}");
            std::process::exit(2);
        }),
        None => EdgeConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        origin = %config.upstream.origin,
        "configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(address) => {
                // A dead exporter is worth logging, not worth dying for.
                if let Err(error) = metrics::init_metrics(address) {
                    tracing::error!(error = %error, "metrics exporter failed to start");
                }
            }
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "failed to parse metrics address"
                );
            }
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = EdgeServer::new(&config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
