//! CLI definition.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Basic helpers for git: repository checks, upstream management, and
/// everyday sync operations.
#[derive(Debug, Parser)]
#[command(name = "gitkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run as if started in this directory
    #[arg(short = 'C', long = "dir", global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether a path holds an initialized repository
    Check(commands::check::CheckArgs),

    /// Show staged, unstaged, and untracked counts
    Status(commands::status::StatusArgs),

    /// Print the current branch name
    Branch(commands::branch::BranchArgs),

    /// Show or configure the upstream of the current branch
    Upstream(commands::upstream::UpstreamArgs),

    /// Add a remote unless it already exists
    RemoteAdd(commands::remote_add::RemoteAddArgs),

    /// Commit all tracked changes
    Commit(commands::commit::CommitArgs),

    /// Pull the upstream with rebase and autostash
    Pull(commands::pull::PullArgs),

    /// Ensure an upstream and push with tags
    Push(commands::push::PushArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Check(args) => commands::check::run(&self.dir, args),
            Commands::Status(args) => commands::status::run(&self.dir, args),
            Commands::Branch(args) => commands::branch::run(&self.dir, args),
            Commands::Upstream(args) => commands::upstream::run(&self.dir, args),
            Commands::RemoteAdd(args) => commands::remote_add::run(&self.dir, args),
            Commands::Commit(args) => commands::commit::run(&self.dir, args),
            Commands::Pull(args) => commands::pull::run(&self.dir, args),
            Commands::Push(args) => commands::push::run(&self.dir, args),
        }
    }
}
