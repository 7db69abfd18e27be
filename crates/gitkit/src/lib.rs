//! Basic helpers for git.
//!
//! This crate wraps [`git2`] with the small set of repository operations
//! that day-to-day automation needs:
//! - Repository detection, opening, and discovery
//! - Idempotent remote creation
//! - Current branch and upstream management
//! - Working tree and index dirtiness checks
//! - Commit-all, pull with rebase and autostash, push with tags
//!
//! Everything hangs off [`Repository`]. Operations that libgit2 does not
//! provide (`pull`, `push`) are delegated to the `git` binary through
//! [`gitkit_util::ShellCommand`], so the host's transports and credential
//! helpers keep working.

mod commit;
mod error;
mod remote;
mod repository;
mod status;
mod sync;
mod upstream;

pub use commit::CommitInfo;
pub use error::{GitError, GitResult};
pub use remote::RemoteInfo;
pub use repository::Repository;
pub use status::WorktreeStatus;
pub use upstream::Upstream;
