//! Harness errors.

use checklist_core::errors::error_code::{self, ChecklistErrorCode};
use checklist_core::errors::{ConfigError, EventError, RemoteError};

/// Errors that stop the action before or after the rules run.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("Cannot write step outputs to {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot render {format} report: {reason}")]
    Report { format: String, reason: String },
}

impl ChecklistErrorCode for ActionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Event(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Remote(e) => e.error_code(),
            Self::Output { .. } => error_code::OUTPUT_ERROR,
            Self::Report { .. } => error_code::REPORT_ERROR,
        }
    }
}
