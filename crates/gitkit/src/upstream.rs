//! Upstream tracking helpers.

use std::fmt;
use std::str::FromStr;

use git2::{BranchType, ErrorCode};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{GitError, GitResult, Repository};

/// A symbolic upstream reference such as `origin/main`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upstream {
    /// The remote name.
    pub remote: String,
    /// The branch name on the remote.
    pub branch: String,
}

impl Upstream {
    /// Creates a new upstream reference.
    #[must_use]
    pub fn new(remote: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            branch: branch.into(),
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.remote, self.branch)
    }
}

impl FromStr for Upstream {
    type Err = GitError;

    /// Splits `remote/branch` on the first `/`.
    ///
    /// Remote names cannot contain `/` while branch names may, so the
    /// first separator is unambiguous.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((remote, branch)) if !remote.is_empty() && !branch.is_empty() => {
                Ok(Self::new(remote, branch))
            }
            _ => Err(GitError::InvalidUpstream(s.to_string())),
        }
    }
}

impl Repository {
    /// Returns the configured upstream of the current branch.
    ///
    /// `None` when the branch has no upstream, or when HEAD is unborn or
    /// detached.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD cannot be read or the upstream name cannot
    /// be parsed.
    pub fn upstream(&self) -> GitResult<Option<Upstream>> {
        let branch_name = self.current_branch()?;
        let branch = match self.inner.find_branch(&branch_name, BranchType::Local) {
            Ok(branch) => branch,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match branch.upstream() {
            Ok(upstream) => {
                let name = upstream
                    .name()?
                    .ok_or_else(|| GitError::InvalidUpstream(branch_name.clone()))?;
                Ok(Some(name.parse()?))
            }
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Sets the upstream of `branch` to `remote/branch`.
    ///
    /// The remote-tracking reference must already exist, matching
    /// `git branch --set-upstream-to`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::BranchNotFound`] when the local branch does not
    /// exist, and [`GitError::RemoteBranchNotFound`] when the
    /// remote-tracking branch is missing.
    pub fn set_upstream(&self, branch: &str, remote: &str) -> GitResult<Upstream> {
        let mut local = match self.inner.find_branch(branch, BranchType::Local) {
            Ok(local) => local,
            Err(e) if e.code() == ErrorCode::NotFound => {
                return Err(GitError::BranchNotFound(branch.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let upstream = Upstream::new(remote, branch);
        match local.set_upstream(Some(&upstream.to_string())) {
            Ok(()) => {
                info!(%upstream, branch, "set upstream");
                Ok(upstream)
            }
            Err(e) if e.code() == ErrorCode::NotFound => {
                Err(GitError::RemoteBranchNotFound(upstream.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the upstream of the current branch, configuring
    /// `default_remote/branch` first when none is set.
    ///
    /// # Errors
    ///
    /// Returns an error when no upstream is set and none can be
    /// configured, for example because the remote-tracking branch does not
    /// exist yet.
    pub fn ensure_upstream(&self, default_remote: &str) -> GitResult<Upstream> {
        if let Some(existing) = self.upstream()? {
            return Ok(existing);
        }

        let branch = self.current_branch()?;
        self.set_upstream(&branch, default_remote)
    }
}
