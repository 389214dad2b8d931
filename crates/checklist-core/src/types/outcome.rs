//! Per-rule outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five compliance rules, in their declared execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    BranchName,
    DocumentTemplate,
    FilesystemPolicy,
    GroupReconciliation,
    ReviewerPolicy,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BranchName => "branch-name",
            Self::DocumentTemplate => "document-template",
            Self::FilesystemPolicy => "filesystem-policy",
            Self::GroupReconciliation => "group-reconciliation",
            Self::ReviewerPolicy => "reviewer-policy",
        }
    }

    /// Human-readable rule name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BranchName => "Branch name",
            Self::DocumentTemplate => "Document template",
            Self::FilesystemPolicy => "Forbidden folders",
            Self::GroupReconciliation => "Execution groups",
            Self::ReviewerPolicy => "Reviewers and routes",
        }
    }

    /// Key used in the historical `results` action output.
    pub fn legacy_key(&self) -> &'static str {
        match self {
            Self::BranchName => "branchName",
            Self::DocumentTemplate => "readmeTemplate",
            Self::FilesystemPolicy => "bdFolders",
            Self::GroupReconciliation => "executionGroups",
            Self::ReviewerPolicy => "reviewersAndRoutes",
        }
    }

    pub fn all() -> &'static [RuleId] {
        &[
            Self::BranchName,
            Self::DocumentTemplate,
            Self::FilesystemPolicy,
            Self::GroupReconciliation,
            Self::ReviewerPolicy,
        ]
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule execution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Pass,
    Fail,
    Warning,
    Skipped,
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Warning => "warning",
            Self::Skipped => "skipped",
        })
    }
}

/// One distinct defect found by a failing rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Stable kebab-case code, e.g. `missing-section`.
    pub code: String,
    pub message: String,
}

impl Violation {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Result produced by each rule exactly once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule_id: RuleId,
    pub status: RuleStatus,
    pub message: String,
    pub violations: Vec<Violation>,
    /// Warning-level remarks attached to a non-failing outcome.
    pub notes: Vec<String>,
}

impl RuleOutcome {
    fn with_status(rule_id: RuleId, status: RuleStatus, message: String) -> Self {
        Self {
            rule_id,
            status,
            message,
            violations: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Create a passing outcome.
    pub fn pass(rule_id: RuleId, message: impl Into<String>) -> Self {
        Self::with_status(rule_id, RuleStatus::Pass, message.into())
    }

    /// Create a failing outcome carrying every violation found.
    pub fn fail(rule_id: RuleId, message: impl Into<String>, violations: Vec<Violation>) -> Self {
        let mut outcome = Self::with_status(rule_id, RuleStatus::Fail, message.into());
        outcome.violations = violations;
        outcome
    }

    /// Create a failing outcome with a single violation whose message is
    /// also the outcome message.
    pub fn fail_single(rule_id: RuleId, code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::fail(rule_id, message.clone(), vec![Violation::new(code, message)])
    }

    /// Create a warned outcome.
    pub fn warning(rule_id: RuleId, message: impl Into<String>) -> Self {
        Self::with_status(rule_id, RuleStatus::Warning, message.into())
    }

    /// Create a skipped outcome.
    pub fn skipped(rule_id: RuleId, reason: impl Into<String>) -> Self {
        Self::with_status(rule_id, RuleStatus::Skipped, reason.into())
    }

    /// Attach a warning-level note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_failure(&self) -> bool {
        self.status == RuleStatus::Fail
    }
}
