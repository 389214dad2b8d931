//! ChecklistErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string that
/// survives into rule outcomes and action logs.
pub trait ChecklistErrorCode {
    /// Returns the error code string (e.g., "REMOTE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DOCUMENT_ERROR: &str = "DOCUMENT_ERROR";
pub const WALK_ERROR: &str = "WALK_ERROR";
pub const REMOTE_ERROR: &str = "REMOTE_ERROR";
pub const REMOTE_NOT_FOUND: &str = "REMOTE_NOT_FOUND";
pub const DECODE_ERROR: &str = "DECODE_ERROR";
pub const EVENT_ERROR: &str = "EVENT_ERROR";
pub const RULE_PANICKED: &str = "RULE_PANICKED";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
