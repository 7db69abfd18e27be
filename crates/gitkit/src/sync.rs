//! Pull and push operations.
//!
//! `pull --rebase --autostash` and `push --follow-tags` have no libgit2
//! equivalent, so they are delegated to the `git` binary with inherited
//! stdio. Progress output and credential prompts reach the terminal
//! directly, and the host's configured transports and credential helpers
//! keep working.

use gitkit_util::ShellCommand;
use tracing::info;

use crate::{GitResult, Repository};

impl Repository {
    /// Pulls from the upstream, rebasing local commits and stashing local
    /// modifications around the rebase.
    ///
    /// A dirty working tree does not block the update.
    ///
    /// # Errors
    ///
    /// Returns an error if `git pull` fails, for example when no upstream
    /// is configured or the rebase hits conflicts.
    pub fn pull_rebase_autostash(&self) -> GitResult<()> {
        info!(path = %self.path().display(), "pulling with rebase and autostash");
        ShellCommand::new("git")
            .args(["pull", "--rebase", "--autostash"])
            .current_dir(self.path())
            .inherit_stdio(true)
            .run()?;
        Ok(())
    }

    /// Pushes the current branch to its upstream, along with annotated
    /// tags that point at pushed commits.
    ///
    /// # Errors
    ///
    /// Returns an error if `git push` fails.
    pub fn push_follow_tags(&self) -> GitResult<()> {
        info!(path = %self.path().display(), "pushing with tags");
        ShellCommand::new("git")
            .args(["push", "--follow-tags"])
            .current_dir(self.path())
            .inherit_stdio(true)
            .run()?;
        Ok(())
    }
}
