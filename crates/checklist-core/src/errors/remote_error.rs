//! Remote platform errors (content fetch and comment listing).

use super::error_code::{self, ChecklistErrorCode};

/// Errors reported by remote collaborators.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("Remote resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Remote request for {resource} returned HTTP {status}: {body}")]
    Http {
        resource: String,
        status: u16,
        body: String,
    },

    #[error("Network error: {reason}")]
    Network { reason: String },

    #[error("Cannot decode remote content: {reason}")]
    Decode { reason: String },
}

impl ChecklistErrorCode for RemoteError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::REMOTE_NOT_FOUND,
            Self::Decode { .. } => error_code::DECODE_ERROR,
            Self::Http { .. } | Self::Network { .. } => error_code::REMOTE_ERROR,
        }
    }
}
