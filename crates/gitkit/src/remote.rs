//! Remote management.

use git2::ErrorCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{GitResult, Repository};

/// A remote as created by [`Repository::remote_create_once`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteInfo {
    /// The remote name.
    pub name: String,
    /// The remote URL.
    pub url: String,
}

impl RemoteInfo {
    /// Creates a new remote description.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl Repository {
    /// Creates a remote unless one with the same name already exists.
    ///
    /// Returns the created remote, or `None` when the name is already
    /// taken. An existing remote keeps its URL untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote cannot be created.
    pub fn remote_create_once(&self, name: &str, url: &str) -> GitResult<Option<RemoteInfo>> {
        match self.inner.find_remote(name) {
            Ok(_) => Ok(None),
            Err(e) if e.code() == ErrorCode::NotFound => {
                let remote = self.inner.remote(name, url)?;
                debug!(name, url, "created remote");
                Ok(Some(RemoteInfo::new(
                    remote.name().unwrap_or(name),
                    remote.url().unwrap_or(url),
                )))
            }
            Err(e) => Err(e.into()),
        }
    }
}
