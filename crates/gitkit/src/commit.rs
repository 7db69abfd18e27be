//! Commit helpers.

use chrono::{DateTime, TimeZone, Utc};
use git2::{Commit, ErrorCode, Oid, RepositoryState};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{GitError, GitResult, Repository};

/// A commit as created by [`Repository::commit_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    /// The commit id (SHA).
    pub id: String,

    /// The full commit message (subject + body).
    pub message: String,

    /// The commit author name.
    pub author: String,

    /// The commit author email.
    pub email: String,

    /// The commit date.
    pub date: DateTime<Utc>,
}

impl CommitInfo {
    /// Creates a new commit description.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            author: author.into(),
            email: email.into(),
            date,
        }
    }

    /// Returns the first line of the commit message (the subject).
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Returns the short id (first 7 characters).
    #[must_use]
    pub fn short_id(&self) -> &str {
        &self.id[..7.min(self.id.len())]
    }
}

impl Repository {
    /// Stages all tracked changes and commits them with the given message.
    ///
    /// Matches `git commit -am`: modifications and deletions of tracked
    /// files are staged on top of whatever the index already holds, while
    /// untracked files are left alone. On an unborn HEAD this creates the
    /// root commit. An in-progress merge is concluded: the commits in
    /// `MERGE_HEAD` become extra parents and the merge state is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::UnmergedFiles`] while conflicts are unresolved,
    /// [`GitError::NothingToCommit`] when staging produces no changes
    /// against HEAD and no merge is pending, or an error if the commit
    /// cannot be created.
    pub fn commit_all(&self, message: &str) -> GitResult<CommitInfo> {
        let mut index = self.inner.index()?;
        if index.has_conflicts() {
            return Err(GitError::UnmergedFiles);
        }

        index.update_all(["*"], None)?;
        index.write()?;

        // Concluding a merge is worth a commit even when the merged tree
        // matches HEAD
        let merge_parents = self.merge_parents()?;
        if merge_parents.is_empty() && !self.has_index_changes()? {
            return Err(GitError::NothingToCommit);
        }

        let tree_id = index.write_tree()?;
        let tree = self.inner.find_tree(tree_id)?;
        let signature = self.inner.signature()?;

        let head = match self.inner.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if e.code() == ErrorCode::UnbornBranch => None,
            Err(e) => return Err(e.into()),
        };
        let parents: Vec<&Commit<'_>> = head.iter().chain(merge_parents.iter()).collect();

        let id = self
            .inner
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;
        if !merge_parents.is_empty() {
            self.inner.cleanup_state()?;
        }
        info!(id = %id, "created commit");

        self.commit_info(id)
    }

    /// Commits listed in `MERGE_HEAD` while a merge is in progress.
    fn merge_parents(&self) -> GitResult<Vec<Commit<'_>>> {
        if self.inner.state() != RepositoryState::Merge {
            return Ok(Vec::new());
        }

        // mergehead_foreach needs &mut Repository, which the &self receiver
        // cannot provide; a scratch handle reads the same MERGE_HEAD while
        // the commits are looked up on self so their lifetimes stay tied to
        // this repository
        let mut ids = Vec::new();
        git2::Repository::open(self.inner.path())?.mergehead_foreach(|id| {
            ids.push(*id);
            true
        })?;

        ids.into_iter()
            .map(|id| Ok(self.inner.find_commit(id)?))
            .collect()
    }

    fn commit_info(&self, id: Oid) -> GitResult<CommitInfo> {
        let commit = self.inner.find_commit(id)?;
        let author = commit.author();
        let time = commit.time();

        Ok(CommitInfo::new(
            id.to_string(),
            commit.message().unwrap_or(""),
            author.name().unwrap_or("Unknown"),
            author.email().unwrap_or(""),
            Utc.timestamp_opt(time.seconds(), 0)
                .single()
                .unwrap_or_else(Utc::now),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::build::CheckoutBuilder;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, Repository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::init(temp_dir.path()).unwrap();

        let mut config = repo.inner.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        (temp_dir, repo)
    }

    fn write_file(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn stage(repo: &Repository, name: &str) {
        let mut index = repo.inner.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }

    /// Commits diverging edits of `notes.txt` on two branches, then starts
    /// a merge that conflicts. Returns the merged-in commit.
    fn start_conflicted_merge(temp_dir: &TempDir, repo: &Repository) -> CommitInfo {
        write_file(temp_dir.path(), "notes.txt", "base\n");
        stage(repo, "notes.txt");
        repo.commit_all("Add notes").unwrap();
        let branch = repo.current_branch().unwrap();

        let base = repo.inner.head().unwrap().peel_to_commit().unwrap();
        repo.inner.branch("feature", &base, false).unwrap();

        write_file(temp_dir.path(), "notes.txt", "ours\n");
        repo.commit_all("Our side").unwrap();

        repo.inner.set_head("refs/heads/feature").unwrap();
        repo.inner
            .checkout_head(Some(CheckoutBuilder::new().force()))
            .unwrap();
        write_file(temp_dir.path(), "notes.txt", "theirs\n");
        let theirs = repo.commit_all("Their side").unwrap();

        repo.inner
            .set_head(&format!("refs/heads/{branch}"))
            .unwrap();
        repo.inner
            .checkout_head(Some(CheckoutBuilder::new().force()))
            .unwrap();

        let annotated = repo
            .inner
            .find_annotated_commit(theirs.id.parse().unwrap())
            .unwrap();
        repo.inner.merge(&[&annotated], None, None).unwrap();
        assert!(repo.inner.index().unwrap().has_conflicts());

        theirs
    }

    #[test]
    fn test_subject_multiline() {
        let commit = CommitInfo::new(
            "abc1234567890",
            "Add feature\n\nWith a body",
            "Test Author",
            "test@example.com",
            Utc::now(),
        );
        assert_eq!(commit.subject(), "Add feature");
    }

    #[test]
    fn test_subject_empty_message() {
        let commit = CommitInfo::new("abc1234567890", "", "a", "e", Utc::now());
        assert_eq!(commit.subject(), "");
    }

    #[test]
    fn test_short_id() {
        let commit = CommitInfo::new("abc1234567890", "message", "a", "e", Utc::now());
        assert_eq!(commit.short_id(), "abc1234");
    }

    #[test]
    fn test_short_id_shorter_than_seven() {
        let commit = CommitInfo::new("abc", "message", "a", "e", Utc::now());
        assert_eq!(commit.short_id(), "abc");
    }

    #[test]
    fn test_commit_all_staged_file_on_unborn_head() {
        let (temp_dir, repo) = create_test_repo();
        write_file(temp_dir.path(), "notes.txt", "hello\n");
        stage(&repo, "notes.txt");

        let info = repo.commit_all("Add notes").unwrap();

        assert_eq!(info.subject(), "Add notes");
        assert_eq!(info.author, "Test User");
        assert_eq!(info.email, "test@example.com");

        // The root commit has no parents
        let commit = repo.inner.find_commit(info.id.parse().unwrap()).unwrap();
        assert_eq!(commit.parent_count(), 0);
    }

    #[test]
    fn test_commit_all_tracked_modification() {
        let (temp_dir, repo) = create_test_repo();
        write_file(temp_dir.path(), "notes.txt", "hello\n");
        stage(&repo, "notes.txt");
        repo.commit_all("Add notes").unwrap();

        write_file(temp_dir.path(), "notes.txt", "changed\n");
        let info = repo.commit_all("Update notes").unwrap();

        assert_eq!(info.subject(), "Update notes");
        assert!(!repo.has_working_changes().unwrap());

        let head = repo.inner.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.id().to_string(), info.id);
        assert_eq!(head.parent_count(), 1);
    }

    #[test]
    fn test_commit_all_stages_deletion() {
        let (temp_dir, repo) = create_test_repo();
        write_file(temp_dir.path(), "notes.txt", "hello\n");
        stage(&repo, "notes.txt");
        repo.commit_all("Add notes").unwrap();

        fs::remove_file(temp_dir.path().join("notes.txt")).unwrap();
        repo.commit_all("Remove notes").unwrap();

        let tree = repo.inner.head().unwrap().peel_to_tree().unwrap();
        assert!(tree.get_path(Path::new("notes.txt")).is_err());
    }

    #[test]
    fn test_commit_all_clean_tree_is_refused() {
        let (temp_dir, repo) = create_test_repo();
        write_file(temp_dir.path(), "notes.txt", "hello\n");
        stage(&repo, "notes.txt");
        repo.commit_all("Add notes").unwrap();

        let result = repo.commit_all("Nothing here");
        assert!(matches!(result, Err(GitError::NothingToCommit)));
    }

    #[test]
    fn test_commit_all_ignores_untracked_files() {
        let (temp_dir, repo) = create_test_repo();
        write_file(temp_dir.path(), "notes.txt", "hello\n");
        stage(&repo, "notes.txt");
        repo.commit_all("Add notes").unwrap();

        write_file(temp_dir.path(), "scratch.txt", "untracked\n");
        let result = repo.commit_all("Should not commit");

        assert!(matches!(result, Err(GitError::NothingToCommit)));
        assert_eq!(repo.status().unwrap().untracked, 1);
    }

    #[test]
    fn test_commit_all_refuses_unmerged_files() {
        let (temp_dir, repo) = create_test_repo();
        start_conflicted_merge(&temp_dir, &repo);

        let result = repo.commit_all("Resolve");
        assert!(matches!(result, Err(GitError::UnmergedFiles)));

        // Still mid-merge; the caller resolves and commits again
        assert_eq!(repo.inner.state(), RepositoryState::Merge);
    }

    #[test]
    fn test_commit_all_concludes_merge_with_two_parents() {
        let (temp_dir, repo) = create_test_repo();
        let theirs = start_conflicted_merge(&temp_dir, &repo);
        let ours = repo.inner.head().unwrap().peel_to_commit().unwrap().id();

        write_file(temp_dir.path(), "notes.txt", "merged\n");
        stage(&repo, "notes.txt");
        let info = repo.commit_all("Merge feature").unwrap();

        let merge = repo.inner.find_commit(info.id.parse().unwrap()).unwrap();
        assert_eq!(merge.parent_count(), 2);
        assert_eq!(merge.parent_id(0).unwrap(), ours);
        assert_eq!(merge.parent_id(1).unwrap().to_string(), theirs.id);
        assert_eq!(repo.inner.state(), RepositoryState::Clean);
    }

    #[test]
    fn test_commit_all_concludes_merge_without_tree_changes() {
        let (temp_dir, repo) = create_test_repo();
        start_conflicted_merge(&temp_dir, &repo);

        // Resolve by keeping our side, so the merged tree matches HEAD
        write_file(temp_dir.path(), "notes.txt", "ours\n");
        stage(&repo, "notes.txt");
        let info = repo.commit_all("Merge feature").unwrap();

        let merge = repo.inner.find_commit(info.id.parse().unwrap()).unwrap();
        assert_eq!(merge.parent_count(), 2);
        assert_eq!(repo.inner.state(), RepositoryState::Clean);
        assert!(repo.inner.find_reference("MERGE_HEAD").is_err());
    }

    #[test]
    fn test_serialize_deserialize() {
        let commit = CommitInfo::new(
            "abc1234567890",
            "Add feature",
            "Test Author",
            "test@example.com",
            Utc::now(),
        );

        let json = serde_json::to_string(&commit).unwrap();
        let deserialized: CommitInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(commit, deserialized);
    }
}
