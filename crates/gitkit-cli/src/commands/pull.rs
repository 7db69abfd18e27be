//! Pull command.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use gitkit::Repository;

/// Arguments for the pull command.
#[derive(Debug, Args)]
pub struct PullArgs {}

/// Runs the pull command.
pub fn run(dir: &Path, _args: PullArgs) -> Result<()> {
    let repo = Repository::discover(dir).context("failed to open git repository")?;
    repo.pull_rebase_autostash().context("failed to pull")?;
    Ok(())
}
