//! Value types shared by the rules, the runner, and the harness.

pub mod document;
pub mod group_set;
pub mod outcome;
pub mod pull_request;
pub mod report;

pub use document::ComplianceDocument;
pub use group_set::GroupSet;
pub use outcome::{RuleId, RuleOutcome, RuleStatus, Violation};
pub use pull_request::{PullRequestContext, RepositoryRef};
pub use report::ComplianceReport;
