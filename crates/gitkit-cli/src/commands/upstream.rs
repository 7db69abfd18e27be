//! Upstream command.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;
use gitkit::Repository;

/// Arguments for the upstream command.
#[derive(Debug, Args)]
pub struct UpstreamArgs {
    /// Configure REMOTE/branch when no upstream is set
    #[arg(long)]
    pub ensure: bool,

    /// Remote used when configuring a missing upstream
    #[arg(long, env = "GITKIT_REMOTE", default_value = "origin")]
    pub remote: String,
}

/// Runs the upstream command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(dir: &Path, args: UpstreamArgs) -> Result<()> {
    let repo = Repository::discover(dir).context("failed to open git repository")?;

    if args.ensure {
        let upstream = repo
            .ensure_upstream(&args.remote)
            .context("failed to ensure upstream")?;
        println!("{upstream}");
        return Ok(());
    }

    let branch = repo
        .current_branch()
        .context("failed to resolve current branch")?;
    match repo.upstream().context("failed to read upstream")? {
        Some(upstream) => println!("{upstream}"),
        None => bail!("no upstream configured for branch {branch}"),
    }

    Ok(())
}
