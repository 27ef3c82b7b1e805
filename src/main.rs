//! lanshelf - Local media server entry point
//!
//! Indexes and streams the media files under a root directory and remembers
//! where playback left off, for a browser client on the local network.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lanshelf::{build_router, AppState, Config};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for lanshelf
#[derive(Parser, Debug)]
#[command(name = "lanshelf")]
#[command(about = "Local media server with playback-position memory")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5000", env = "LANSHELF_PORT")]
    port: u16,

    /// Root folder containing media files
    #[arg(short, long, env = "LANSHELF_ROOT")]
    root: PathBuf,

    /// Playback record file (defaults to .lanshelf-record.json inside the root)
    #[arg(long, env = "LANSHELF_RECORD_FILE")]
    record_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lanshelf=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting lanshelf v{} on port {}", env!("CARGO_PKG_VERSION"), args.port);

    let config = Config::new(args.root, args.record_file, args.port)
        .context("Invalid configuration")?;
    info!("Media root: {}", config.root.display());
    info!("Playback record: {}", config.record_path.display());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = build_router(AppState::new(config));

    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
