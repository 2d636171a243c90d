//! MoodCanvas Singer backend - main entry point
//!
//! Serves the emotion-to-music REST API and the demo front end.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use moodcanvas_common::config::{ConfigOverrides, ServerConfig};
use moodcanvas_server::{build_router, AppState};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for moodcanvas-server
///
/// Every setting may also come from `MOODCANVAS_*` environment variables or
/// a TOML config file.
#[derive(Parser, Debug)]
#[command(name = "moodcanvas-server")]
#[command(about = "Emotion-to-music recommendation backend for MoodCanvas Singer")]
#[command(version)]
struct Args {
    /// Interface to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Landing page served at /
    #[arg(long)]
    index_file: Option<PathBuf>,

    /// Directory served under /static
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl From<Args> for ConfigOverrides {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            index_file: args.index_file,
            static_dir: args.static_dir,
            config_file: args.config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodcanvas_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!(
        "Starting MoodCanvas Singer backend v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = ServerConfig::resolve(args.into()).context("Failed to load configuration")?;
    let state = AppState::new(&config);
    info!(
        "Available emotions: {}",
        state.catalog.emotion_types().join(", ")
    );
    info!("Landing page: {}", config.index_file.display());
    info!("Static assets: {}", config.static_dir.display());

    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on http://{}", addr);
    info!("Status: http://{}/api/status", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
