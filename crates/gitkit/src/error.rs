//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found.
    #[error("no git repository found from {0}")]
    RepoNotFound(std::path::PathBuf),

    /// Not a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(std::path::PathBuf),

    /// Local branch not found.
    #[error("branch not found: {0}")]
    BranchNotFound(String),

    /// Remote-tracking branch not found.
    #[error("remote-tracking branch not found: {0}")]
    RemoteBranchNotFound(String),

    /// Upstream reference could not be parsed.
    #[error("invalid upstream reference: {0}")]
    InvalidUpstream(String),

    /// HEAD does not resolve to a branch name.
    #[error("unable to resolve HEAD to a branch name")]
    UnresolvedHead,

    /// Commit requested while the index matches HEAD.
    #[error("nothing to commit")]
    NothingToCommit,

    /// Commit requested while the index holds unresolved conflicts.
    #[error("cannot commit with unmerged files")]
    UnmergedFiles,

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),

    /// Shell error.
    #[error("shell error: {0}")]
    Shell(#[from] gitkit_util::ShellError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
