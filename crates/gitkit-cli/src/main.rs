//! Gitkit CLI - basic helpers for everyday git operations.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

fn main() -> Result<()> {
    // Parse first so --verbose can widen the default filter; RUST_LOG wins
    let cli = cli::Cli::parse();

    // Logs go to stderr; stdout is reserved for command output
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
