//! BC Bid Checklist MCP Server - Main Entry Point
//!
//! This is the main entry point for the checklist MCP server application.
//! The actual implementation is in the `bcbid_checklist` library.

use anyhow::{Context, Result};
use bcbid_checklist::{ChecklistDefinition, ChecklistServerHandler};
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// BC Bid Checklist MCP Server - track readiness to bid on BC government contracts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the checklist state file (JSON)
    #[arg(required_unless_present = "ephemeral")]
    file: Option<PathBuf>,

    /// Custom checklist definition (TOML) instead of the built-in BC Bid checklist
    #[arg(long, value_name = "TOML")]
    checklist: Option<PathBuf>,

    /// Keep state in memory only; nothing is written to disk
    #[arg(long, conflicts_with = "file")]
    ephemeral: bool,
}

/// Log to stderr; stdout carries the MCP transport
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    init_tracing();

    let definition = match &args.checklist {
        Some(path) => ChecklistDefinition::from_toml_file(path)
            .with_context(|| format!("Failed to load checklist from {}", path.display()))?,
        None => ChecklistDefinition::default(),
    };

    let handler = match &args.file {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using checklist state file");
            ChecklistServerHandler::new(path, definition)
        }
        None => {
            tracing::info!("Running with in-memory checklist state");
            ChecklistServerHandler::in_memory(definition)
        }
    };

    serve_stdio(handler).await?;
    Ok(())
}
