//! Errors reading the triggering event.

use super::error_code::{self, ChecklistErrorCode};

/// Errors that can occur while reading the invocation context.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Required environment variable {name} is not set")]
    MissingVariable { name: String },

    #[error("Cannot read event payload {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Malformed event payload: {reason}")]
    Malformed { reason: String },
}

impl ChecklistErrorCode for EventError {
    fn error_code(&self) -> &'static str {
        error_code::EVENT_ERROR
    }
}
