//! Remote-add command.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use gitkit::Repository;

/// Arguments for the remote-add command.
#[derive(Debug, Args)]
pub struct RemoteAddArgs {
    /// Remote name
    pub name: String,

    /// Remote URL
    pub url: String,
}

/// Runs the remote-add command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(dir: &Path, args: RemoteAddArgs) -> Result<()> {
    let repo = Repository::discover(dir).context("failed to open git repository")?;

    match repo
        .remote_create_once(&args.name, &args.url)
        .context("failed to create remote")?
    {
        Some(remote) => println!("added remote {} -> {}", remote.name, remote.url),
        None => println!("remote {} already exists", args.name),
    }

    Ok(())
}
