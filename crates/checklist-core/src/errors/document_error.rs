//! Compliance document access errors.

use super::error_code::{self, ChecklistErrorCode};

/// Errors raised by a document store. A missing document is not an error;
/// stores report it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Cannot read document {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

impl ChecklistErrorCode for DocumentError {
    fn error_code(&self) -> &'static str {
        error_code::DOCUMENT_ERROR
    }
}
