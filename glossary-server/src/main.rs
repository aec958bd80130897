//! Glossary record store server.
//!
//! Serves one glossary collection over HTTP, persisted as a JSON file in the
//! data directory. Writes replace the whole file; concurrent clients race and
//! the last write wins.
//!
//! Usage:
//!   glossary-server --port 4000 --data-dir ./data

use anyhow::{Context, Result};
use clap::Parser;
use glossary_server::build_router;
use glossary_store::{FileRecordStore, RecordStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "glossary-server")]
#[command(about = "HTTP record store for the glossary")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "4000")]
    port: u16,

    /// Directory holding glossary.json
    #[arg(long, env = "GLOSSARY_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level.as_str())),
        )
        .with_target(false)
        .compact()
        .init();

    let store = FileRecordStore::in_dir(&args.data_dir);
    info!("Glossary store at {}", store.path().display());
    let stored = store
        .get()
        .await
        .context("Failed to initialize glossary store")?;
    info!("Loaded {} terms", stored.len());

    let app = build_router(Arc::new(store));
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port))
        .await
        .with_context(|| format!("Failed to bind HTTP port {}", args.port))?;
    info!("Glossary server listening on port {}", args.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;
    info!("Glossary server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
