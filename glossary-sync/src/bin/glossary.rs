//! Glossary command-line client.
//!
//! Each invocation bootstraps from the local snapshot, reconciles once with
//! the record store, applies one command, and waits for the resulting push.
//! When the store is unreachable the change is still kept locally.
//!
//! Usage:
//!   glossary --remote http://localhost:4000 add --term LINQ --definition "Query syntax"
//!   glossary import terms.csv
//!   glossary export --format csv --out ./downloads

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glossary_codec::Format;
use glossary_sync::{ReconcileOutcome, SyncConfig, SyncController};
use glossary_types::TermRecord;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "glossary")]
#[command(about = "Glossary client with local cache and best-effort sync")]
struct Args {
    /// Base URL of the glossary server
    #[arg(long, env = "GLOSSARY_REMOTE", default_value = "http://localhost:4000")]
    remote: String,

    /// Path of the local snapshot file
    #[arg(long, env = "GLOSSARY_SNAPSHOT", default_value = "glossary-snapshot.json")]
    snapshot: PathBuf,

    /// Timeout for each request to the server, in milliseconds
    #[arg(long, default_value = "8000")]
    timeout_ms: u64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every term with its index
    List,
    /// Add a term, replacing one with the same name
    Add {
        #[arg(long)]
        term: String,
        #[arg(long, default_value = "")]
        definition: String,
        /// Usage example (repeatable)
        #[arg(long = "example")]
        examples: Vec<String>,
        #[arg(long)]
        link: Option<String>,
    },
    /// Delete the term at an index
    Delete { index: usize },
    /// Append an example to the term at an index
    AddExample { index: usize, text: String },
    /// Import a .json or .csv file
    Import { path: PathBuf },
    /// Write glossary.json or glossary.csv into a directory
    Export {
        #[arg(long, default_value = "json")]
        format: Format,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Restore the default glossary
    Reset,
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

    let config = SyncConfig {
        remote_url: args.remote,
        request_timeout_ms: args.timeout_ms,
        snapshot_path: args.snapshot,
    };
    let mut controller =
        SyncController::from_config(&config).context("Failed to start glossary client")?;

    match controller.reconcile().await {
        ReconcileOutcome::RemoteUnavailable { reason } => {
            warn!("Working offline: {}", reason);
        }
        outcome => info!("Reconcile: {:?}", outcome),
    }

    match args.command {
        Command::List => {
            for (i, record) in controller.collection().iter().enumerate() {
                println!("{i:>3}  {}  {}", record.term, record.definition);
                for example in &record.examples {
                    println!("       - {example}");
                }
                if let Some(link) = &record.link {
                    println!("       {link}");
                }
            }
        }
        Command::Add {
            term,
            definition,
            examples,
            link,
        } => {
            let mut record = TermRecord::new(term, definition).with_examples(examples);
            if let Some(link) = link {
                record = record.with_link(link);
            }
            controller.add_term(record).context("Failed to add term")?;
        }
        Command::Delete { index } => {
            let removed = controller.delete_term(index)?;
            println!("Deleted {}", removed.term);
        }
        Command::AddExample { index, text } => {
            controller.add_example(index, text)?;
        }
        Command::Import { path } => {
            let summary = controller
                .import_file(&path)
                .with_context(|| format!("Failed to import {}", path.display()))?;
            println!(
                "Imported {} terms ({} skipped), {} total",
                summary.imported, summary.skipped, summary.total
            );
        }
        Command::Export { format, out } => {
            let path = controller.export_to_dir(format, &out)?;
            println!("Wrote {}", path.display());
        }
        Command::Reset => {
            controller.reset();
            println!("Restored {} default terms", controller.collection().len());
        }
    }

    controller.flush().await?;
    let stats = controller.push_stats();
    if stats.failed > 0 {
        warn!("Saved locally only; the server did not accept the update");
    }
    controller.shutdown().await;
    Ok(())
}
