//! Commit command.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;
use gitkit::{GitError, Repository};

/// Arguments for the commit command.
#[derive(Debug, Args)]
pub struct CommitArgs {
    /// Commit message
    #[arg(short, long)]
    pub message: String,
}

/// Runs the commit command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(dir: &Path, args: CommitArgs) -> Result<()> {
    let repo = Repository::discover(dir).context("failed to open git repository")?;

    match repo.commit_all(&args.message) {
        Ok(commit) => {
            println!("[{}] {}", commit.short_id(), commit.subject());
            Ok(())
        }
        Err(GitError::NothingToCommit) => bail!("nothing to commit, working tree clean"),
        Err(e) => Err(e).context("failed to commit"),
    }
}
