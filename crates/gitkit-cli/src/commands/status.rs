//! Status command.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use gitkit::Repository;

/// Arguments for the status command.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Print the status as JSON
    #[arg(long)]
    pub json: bool,
}

/// Runs the status command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(dir: &Path, args: StatusArgs) -> Result<()> {
    let repo = Repository::discover(dir).context("failed to open git repository")?;
    let status = repo.status().context("failed to read repository status")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    if status.is_dirty() || status.untracked > 0 {
        println!("staged:    {}", status.staged);
        println!("unstaged:  {}", status.unstaged);
        println!("untracked: {}", status.untracked);
        if status.conflicted > 0 {
            println!("conflicted: {}", status.conflicted);
        }
    } else {
        println!("working tree clean");
    }

    Ok(())
}
