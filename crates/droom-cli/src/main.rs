//! Droom setup CLI
//!
//! One binary for the three client-onboarding workflows:
//! - `graph-init`: idempotent Neo4j schema and seed reconciliation
//! - `index-audit`: read-only Pinecone index configuration report
//! - `verify`: credential-gated checks across every integrated service

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

mod graph_init;
mod index_audit;
mod verify;

#[derive(Parser)]
#[command(name = "droom-setup")]
#[command(
    author,
    version,
    about = "Droom Marketing Factory: client setup and verification"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the Neo4j schema: constraints, indexes, and seed nodes.
    ///
    /// Safe to re-run. Every statement either carries IF NOT EXISTS or is
    /// a MERGE keyed on a deterministic id, so an existing schema is
    /// verified rather than duplicated.
    GraphInit {
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Audit the shared Pinecone index configuration (read-only).
    ///
    /// Documents the namespaces this client will use. Namespaces are
    /// created implicitly on first upsert; the audit never writes.
    IndexAudit {
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Run credential-gated checks against every integrated service.
    ///
    /// Checks whose credentials are missing skip rather than fail, so the
    /// suite is safe to run against a partial environment.
    Verify {
        /// Only run checks whose name contains this substring
        #[arg(short = 'k', long)]
        filter: Option<String>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow!("failed to initialize tokio runtime: {e}"))?;

    let exit_code = rt.block_on(async move {
        match cli.command {
            Commands::GraphInit { format } => graph_init::run(&format).await,
            Commands::IndexAudit { format } => index_audit::run(&format).await,
            Commands::Verify { filter, format } => verify::run(filter.as_deref(), &format).await,
        }
    })?;

    std::process::exit(exit_code);
}
