//! Push command.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use gitkit::Repository;
use tracing::info;

/// Arguments for the push command.
#[derive(Debug, Args)]
pub struct PushArgs {
    /// Remote used when configuring a missing upstream
    #[arg(long, env = "GITKIT_REMOTE", default_value = "origin")]
    pub remote: String,
}

/// Runs the push command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(dir: &Path, args: PushArgs) -> Result<()> {
    let repo = Repository::discover(dir).context("failed to open git repository")?;

    let upstream = repo
        .ensure_upstream(&args.remote)
        .context("failed to ensure upstream")?;
    info!(%upstream, "pushing");

    repo.push_follow_tags().context("failed to push")?;
    println!("pushed to {upstream}");
    Ok(())
}
