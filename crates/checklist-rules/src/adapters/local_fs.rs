//! Filesystem-backed document store and directory walker.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use checklist_core::errors::{DocumentError, WalkError};

use crate::ports::{DirectoryWalker, DocumentStore, SkippedPath, WalkOutcome};

/// Reads documents relative to a repository root.
#[derive(Debug, Clone)]
pub struct LocalDocumentStore {
    root: PathBuf,
}

impl LocalDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentStore for LocalDocumentStore {
    fn read_document(&self, path: &str) -> Result<Option<String>, DocumentError> {
        let full = self.root.join(path);
        match std::fs::read_to_string(&full) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DocumentError::Unreadable {
                path: full.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

/// Single-threaded recursive directory walker. Symlinks are not followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDirectoryWalker;

impl LocalDirectoryWalker {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryWalker for LocalDirectoryWalker {
    fn walk_directories(&self, root: &Path, excluded: &[String]) -> Result<WalkOutcome, WalkError> {
        let meta = std::fs::metadata(root).map_err(|e| WalkError::RootUnreadable {
            path: root.display().to_string(),
            reason: e.to_string(),
        })?;
        if !meta.is_dir() {
            return Err(WalkError::RootUnreadable {
                path: root.display().to_string(),
                reason: "not a directory".to_string(),
            });
        }

        let mut outcome = WalkOutcome::default();
        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                !(entry.file_type().is_dir()
                    && excluded
                        .iter()
                        .any(|name| entry.file_name().to_str() == Some(name.as_str())))
            });

        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_dir() => {
                    let relative = entry
                        .path()
                        .strip_prefix(root)
                        .unwrap_or(entry.path())
                        .to_path_buf();
                    outcome.directories.push(relative);
                }
                Ok(_) => {}
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.strip_prefix(root).unwrap_or(p).to_path_buf())
                        .unwrap_or_default();
                    debug!(path = %path.display(), error = %e, "skipping unreadable path");
                    outcome.skipped.push(SkippedPath {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDocumentStore::new(dir.path());
        assert!(store.read_document("README.md").unwrap().is_none());
    }

    #[test]
    fn walk_is_relative_and_skips_excluded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src/bd")).unwrap();
        std::fs::create_dir_all(dir.path().join(".git/bd")).unwrap();
        std::fs::write(dir.path().join("src/file.txt"), "x").unwrap();

        let outcome = LocalDirectoryWalker::new()
            .walk_directories(dir.path(), &[".git".to_string()])
            .unwrap();
        assert_eq!(
            outcome.directories,
            vec![PathBuf::from("src"), PathBuf::from("src/bd")]
        );
        assert!(outcome.skipped.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_is_skipped_and_walk_continues() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("a_locked");
        std::fs::create_dir_all(locked.join("hidden")).unwrap();
        std::fs::create_dir_all(dir.path().join("bd")).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not bind a privileged user.
        if std::fs::read_dir(&locked).is_ok() {
            std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let outcome = LocalDirectoryWalker::new().walk_directories(dir.path(), &[]);
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        let outcome = outcome.unwrap();

        assert!(outcome.directories.contains(&PathBuf::from("bd")));
        assert!(!outcome.directories.contains(&PathBuf::from("a_locked/hidden")));
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].path, PathBuf::from("a_locked"));
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = LocalDirectoryWalker::new().walk_directories(&dir.path().join("nope"), &[]);
        assert!(matches!(result, Err(WalkError::RootUnreadable { .. })));
    }
}
