//! Branch command.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use gitkit::Repository;

/// Arguments for the branch command.
#[derive(Debug, Args)]
pub struct BranchArgs {}

/// Runs the branch command.
pub fn run(dir: &Path, _args: BranchArgs) -> Result<()> {
    let repo = Repository::discover(dir).context("failed to open git repository")?;
    let branch = repo
        .current_branch()
        .context("failed to resolve current branch")?;

    println!("{branch}");
    Ok(())
}
