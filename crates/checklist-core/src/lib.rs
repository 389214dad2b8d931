//! Core types, errors, config, and tracing for the ESB/ACE12 repository checklist.
//!
//! Everything in here is shared by the rule engine (`checklist-rules`) and the
//! action harness (`checklist-action`). Nothing in this crate performs I/O
//! beyond reading configuration files.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
