//! Rule evaluation errors.

use super::error_code::{self, ChecklistErrorCode};
use super::{DocumentError, WalkError};

/// Errors a rule may return instead of an outcome.
/// Aggregates collaborator errors via `From` conversions; the runner turns
/// any of them into a failing outcome for that rule only.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Walk error: {0}")]
    Walk(#[from] WalkError),

    #[error("Rule panicked: {0}")]
    Panicked(String),
}

impl ChecklistErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Document(e) => e.error_code(),
            Self::Walk(e) => e.error_code(),
            Self::Panicked(_) => error_code::RULE_PANICKED,
        }
    }
}
