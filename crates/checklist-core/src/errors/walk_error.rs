//! Directory walk errors.

use super::error_code::{self, ChecklistErrorCode};

/// Errors that abort a directory walk. Unreadable subdirectories never
/// produce this; walkers skip them and report the skipped paths instead.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("Cannot walk root directory {path}: {reason}")]
    RootUnreadable { path: String, reason: String },
}

impl ChecklistErrorCode for WalkError {
    fn error_code(&self) -> &'static str {
        error_code::WALK_ERROR
    }
}
