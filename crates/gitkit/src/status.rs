//! Working tree and index status.

use git2::{Status, StatusOptions};
use serde::{Deserialize, Serialize};

use crate::{GitResult, Repository};

/// Snapshot of repository dirtiness.
///
/// Untracked files are counted separately and do not make the tree dirty,
/// matching the `git diff --quiet` family of checks. Unmerged files make
/// both the index and the working tree dirty, as those checks report them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorktreeStatus {
    /// Files with changes staged in the index.
    pub staged: usize,
    /// Tracked files with unstaged changes.
    pub unstaged: usize,
    /// Untracked files.
    pub untracked: usize,
    /// Files left unmerged by a conflicting merge or rebase.
    pub conflicted: usize,
}

impl WorktreeStatus {
    /// Returns `true` when the index holds staged changes.
    ///
    /// Unmerged files count, matching `git diff --cached --quiet`.
    #[must_use]
    pub fn has_staged(&self) -> bool {
        self.staged > 0 || self.conflicted > 0
    }

    /// Returns `true` when tracked files have unstaged changes.
    ///
    /// Unmerged files count, matching `git diff --quiet`.
    #[must_use]
    pub fn has_unstaged(&self) -> bool {
        self.unstaged > 0 || self.conflicted > 0
    }

    /// Returns `true` when staged or unstaged changes exist.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.has_staged() || self.has_unstaged()
    }
}

impl Repository {
    /// Collects working tree and index status in a single pass.
    ///
    /// Untracked files are included, ignored files are not. A file can
    /// count as both staged and unstaged when it was modified again after
    /// staging. Unmerged files are counted once, under `conflicted`.
    ///
    /// # Errors
    ///
    /// Returns an error if the status cannot be read, for example in a
    /// bare repository.
    pub fn status(&self) -> GitResult<WorktreeStatus> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let index_changes = Status::INDEX_NEW
            | Status::INDEX_MODIFIED
            | Status::INDEX_DELETED
            | Status::INDEX_RENAMED
            | Status::INDEX_TYPECHANGE;
        let worktree_changes =
            Status::WT_MODIFIED | Status::WT_DELETED | Status::WT_RENAMED | Status::WT_TYPECHANGE;

        let statuses = self.inner.statuses(Some(&mut options))?;

        let mut status = WorktreeStatus::default();
        for entry in statuses.iter() {
            let flags = entry.status();
            if flags.is_conflicted() {
                status.conflicted += 1;
                continue;
            }
            if flags.intersects(index_changes) {
                status.staged += 1;
            }
            if flags.contains(Status::WT_NEW) {
                status.untracked += 1;
            } else if flags.intersects(worktree_changes) {
                status.unstaged += 1;
            }
        }

        Ok(status)
    }

    /// Returns `true` if tracked files have unstaged changes.
    ///
    /// Matches `git diff --quiet`: untracked files do not count.
    ///
    /// # Errors
    ///
    /// Returns an error if the status cannot be read.
    pub fn has_working_changes(&self) -> GitResult<bool> {
        Ok(self.status()?.has_unstaged())
    }

    /// Returns `true` if the index holds staged changes.
    ///
    /// Matches `git diff --cached --quiet`.
    ///
    /// # Errors
    ///
    /// Returns an error if the status cannot be read.
    pub fn has_index_changes(&self) -> GitResult<bool> {
        Ok(self.status()?.has_staged())
    }
}
