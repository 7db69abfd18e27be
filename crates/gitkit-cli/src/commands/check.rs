//! Check command.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Args;
use gitkit::Repository;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to check (defaults to the working directory)
    pub path: Option<PathBuf>,
}

/// Runs the check command.
///
/// Fails when the path does not hold an initialized repository, so shell
/// scripts can branch on the exit status.
pub fn run(dir: &Path, args: CheckArgs) -> Result<()> {
    // join() keeps an absolute PATH intact, so only relative paths are
    // anchored to --dir
    let path = args
        .path
        .map_or_else(|| dir.to_path_buf(), |path| dir.join(path));

    if Repository::is_init(&path) {
        println!("{} is a git repository", path.display());
        Ok(())
    } else {
        bail!("no git repository at {}", path.display());
    }
}
