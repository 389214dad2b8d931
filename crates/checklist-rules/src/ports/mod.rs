//! Collaborator ports consumed by the rules.
//!
//! Filesystem ports are synchronous; remote ports are async because they
//! are the engine's network suspension points.

pub mod remote;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use checklist_core::errors::{DocumentError, WalkError};

pub use remote::{CommentLister, ContentEncoding, ContentFetcher, FetchedContent, RemoteFile};

/// Reads the compliance document.
pub trait DocumentStore: Send + Sync {
    /// Returns `Ok(None)` when the document does not exist.
    fn read_document(&self, path: &str) -> Result<Option<String>, DocumentError>;
}

/// A directory the walker could not enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPath {
    pub path: PathBuf,
    pub reason: String,
}

/// Directories found under a root, relative to it, plus what was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOutcome {
    pub directories: Vec<PathBuf>,
    pub skipped: Vec<SkippedPath>,
}

/// Enumerates directories recursively.
pub trait DirectoryWalker: Send + Sync {
    /// Walk `root`, never descending into directories named in `excluded`.
    /// Unreadable subdirectories are reported in `skipped`; only an
    /// unreadable root is an error.
    fn walk_directories(&self, root: &Path, excluded: &[String]) -> Result<WalkOutcome, WalkError>;
}

/// Which optional remote capabilities are available for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub remote_config: bool,
    pub remote_comments: bool,
}

/// Every collaborator the default rule set needs.
///
/// The remote ports are optional: their absence is how a missing token
/// reaches the rules.
#[derive(Clone)]
pub struct Collaborators {
    pub walker: Arc<dyn DirectoryWalker>,
    pub content_fetcher: Option<Arc<dyn ContentFetcher>>,
    pub comment_lister: Option<Arc<dyn CommentLister>>,
}

impl Collaborators {
    pub fn new(walker: Arc<dyn DirectoryWalker>) -> Self {
        Self {
            walker,
            content_fetcher: None,
            comment_lister: None,
        }
    }

    pub fn with_content_fetcher(mut self, fetcher: Arc<dyn ContentFetcher>) -> Self {
        self.content_fetcher = Some(fetcher);
        self
    }

    pub fn with_comment_lister(mut self, lister: Arc<dyn CommentLister>) -> Self {
        self.comment_lister = Some(lister);
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            remote_config: self.content_fetcher.is_some(),
            remote_comments: self.comment_lister.is_some(),
        }
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("walker", &"<DirectoryWalker>")
            .field("content_fetcher", &self.content_fetcher.as_ref().map(|_| "<ContentFetcher>"))
            .field("comment_lister", &self.comment_lister.as_ref().map(|_| "<CommentLister>"))
            .finish()
    }
}
