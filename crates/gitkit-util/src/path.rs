//! Path resolution helpers.

use std::path::{Component, Path, PathBuf};

/// Resolves a path to an absolute, lexically normalized form.
///
/// A leading `~` is expanded to the home directory, relative paths are
/// anchored at the current directory, and `.`/`..` components are removed
/// without touching the filesystem. The result may name a path that does
/// not exist.
#[must_use]
pub fn resolve_path(path: impl AsRef<Path>) -> PathBuf {
    let expanded = expand_home(path.as_ref());
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(expanded),
            Err(_) => expanded,
        }
    };
    normalize(&absolute)
}

fn expand_home(path: &Path) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return path.to_path_buf();
    };
    if path == Path::new("~") {
        return home;
    }
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_unchanged() {
        assert_eq!(resolve_path("/tmp/repo"), PathBuf::from("/tmp/repo"));
    }

    #[test]
    fn test_relative_path_is_anchored() {
        let resolved = resolve_path("some/dir");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/dir"));
    }

    #[test]
    fn test_parent_components_removed() {
        assert_eq!(resolve_path("/tmp/a/../b"), PathBuf::from("/tmp/b"));
    }

    #[test]
    fn test_current_dir_components_removed() {
        assert_eq!(resolve_path("/tmp/./a/./b"), PathBuf::from("/tmp/a/b"));
    }

    #[test]
    fn test_parent_of_root_stays_root() {
        assert_eq!(resolve_path("/../.."), PathBuf::from("/"));
    }

    #[test]
    fn test_tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolve_path("~"), home);
            assert_eq!(resolve_path("~/repo"), home.join("repo"));
        }
    }

    #[test]
    fn test_tilde_prefixed_name_is_untouched() {
        let resolved = resolve_path("~backup/repo");
        assert!(resolved.ends_with("~backup/repo"));
    }
}
