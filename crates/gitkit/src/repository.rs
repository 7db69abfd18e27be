//! Git repository wrapper.

use std::path::Path;

use git2::{ErrorCode, Repository as Git2Repo};
use gitkit_util::resolve_path;
use tracing::debug;

use crate::{GitError, GitResult};

/// A Git repository wrapper.
pub struct Repository {
    pub(crate) inner: Git2Repo,
}

impl Repository {
    /// Initializes a new repository at the given path.
    ///
    /// The directory is created when missing. Reinitializing an existing
    /// repository is harmless.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be initialized.
    pub fn init(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = resolve_path(path);
        let inner = Git2Repo::init(&path)?;
        debug!(path = %path.display(), "initialized repository");
        Ok(Self { inner })
    }

    /// Opens a repository at the given path.
    ///
    /// The path is resolved first (home expansion, absolutization); parent
    /// directories are not searched.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = resolve_path(path);
        let inner = Git2Repo::open(&path).map_err(|_| GitError::NotARepo(path))?;
        Ok(Self { inner })
    }

    /// Discovers a repository walking up from the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover(start: impl AsRef<Path>) -> GitResult<Self> {
        let start = resolve_path(start);
        let inner = Git2Repo::discover(&start).map_err(|_| GitError::RepoNotFound(start))?;
        Ok(Self { inner })
    }

    /// Returns `true` when the given path holds an initialized repository.
    ///
    /// Missing paths and plain directories both report `false`. Parent
    /// directories are not searched, so a subdirectory of a repository is
    /// not itself considered initialized.
    #[must_use]
    pub fn is_init(path: impl AsRef<Path>) -> bool {
        let path = resolve_path(path);
        if !path.exists() {
            return false;
        }
        Git2Repo::open(path).is_ok()
    }

    /// Returns the repository root path.
    ///
    /// For bare repositories this is the git directory itself.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns the current branch name.
    ///
    /// Matches `git rev-parse --abbrev-ref HEAD`: the branch shorthand when
    /// HEAD is attached, the literal `HEAD` when detached. An unborn HEAD
    /// (fresh repository without commits) reports the branch HEAD points
    /// at rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD cannot be read or does not resolve to a
    /// branch name.
    pub fn current_branch(&self) -> GitResult<String> {
        match self.inner.head() {
            Ok(head) if head.is_branch() => head
                .shorthand()
                .map(ToString::to_string)
                .ok_or(GitError::UnresolvedHead),
            Ok(_) => Ok("HEAD".to_string()),
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head = self.inner.find_reference("HEAD")?;
                let target = head.symbolic_target().ok_or(GitError::UnresolvedHead)?;
                Ok(target
                    .strip_prefix("refs/heads/")
                    .unwrap_or(target)
                    .to_string())
            }
            Err(e) => Err(e.into()),
        }
    }
}
