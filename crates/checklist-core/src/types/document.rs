//! The compliance document under check.

use serde::{Deserialize, Serialize};

/// Text of the repository's compliance document.
///
/// Read once per run and shared read-only by every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceDocument {
    path: String,
    content: String,
}

impl ComplianceDocument {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Path the document was read from, relative to the repository root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lines with any trailing `\r` removed.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines().map(|line| line.trim_end_matches('\r'))
    }
}
