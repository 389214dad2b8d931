//! Compliance validation engine.
//!
//! Subsystems:
//! - `ports`: collaborator traits (document store, directory walker, remote content, comments)
//! - `adapters`: local filesystem implementations of the ports
//! - `parsing`: pure extraction functions over the document and the properties registry
//! - `rules`: the five compliance rules
//! - `runner`: isolated, order-preserving rule execution
//! - `reporters`: console, JSON, and GitHub annotation output

pub mod adapters;
pub mod parsing;
pub mod ports;
pub mod reporters;
pub mod rules;
pub mod runner;

pub use rules::{ComplianceRule, DocumentSlot, RuleInput};
pub use runner::ComplianceRunner;
