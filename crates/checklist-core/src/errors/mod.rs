//! Error handling for the checklist.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod document_error;
pub mod error_code;
pub mod event_error;
pub mod remote_error;
pub mod rule_error;
pub mod walk_error;

pub use config_error::ConfigError;
pub use document_error::DocumentError;
pub use error_code::ChecklistErrorCode;
pub use event_error::EventError;
pub use remote_error::RemoteError;
pub use rule_error::RuleError;
pub use walk_error::WalkError;
