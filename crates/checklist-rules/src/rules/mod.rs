//! Compliance rules.
//!
//! Each rule reads a shared [`RuleInput`] and produces exactly one
//! [`RuleOutcome`]. Rules are independent; none reads another's outcome.

pub mod branch_name;
pub mod document_template;
pub mod filesystem_policy;
pub mod group_reconciliation;
pub mod reviewer_policy;

use std::path::PathBuf;

use async_trait::async_trait;

use checklist_core::errors::{DocumentError, RuleError};
use checklist_core::types::{
    ComplianceDocument, PullRequestContext, RepositoryRef, RuleId, RuleOutcome,
};

use crate::ports::DocumentStore;

pub use branch_name::BranchNameRule;
pub use document_template::DocumentTemplateRule;
pub use filesystem_policy::FilesystemPolicyRule;
pub use group_reconciliation::GroupReconciliationRule;
pub use reviewer_policy::ReviewerPolicyRule;

/// The compliance document as the rules see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSlot {
    Loaded(ComplianceDocument),
    Missing { path: String },
    Unreadable { path: String, reason: String },
}

impl DocumentSlot {
    pub fn document(&self) -> Option<&ComplianceDocument> {
        match self {
            Self::Loaded(doc) => Some(doc),
            _ => None,
        }
    }
}

/// Everything a rule may read. Built once per run and never mutated.
#[derive(Debug, Clone)]
pub struct RuleInput {
    /// Absent when the run was not triggered by a pull request.
    pub pull_request: Option<PullRequestContext>,
    pub repository: Option<RepositoryRef>,
    /// Repository root on the local filesystem.
    pub root: PathBuf,
    pub document: DocumentSlot,
}

impl RuleInput {
    /// Read the document at `document_path` once and build the input.
    pub fn load(
        pull_request: Option<PullRequestContext>,
        repository: Option<RepositoryRef>,
        root: impl Into<PathBuf>,
        store: &dyn DocumentStore,
        document_path: &str,
    ) -> Self {
        let document = match store.read_document(document_path) {
            Ok(Some(content)) => DocumentSlot::Loaded(ComplianceDocument::new(document_path, content)),
            Ok(None) => DocumentSlot::Missing {
                path: document_path.to_string(),
            },
            Err(DocumentError::Unreadable { path, reason }) => {
                DocumentSlot::Unreadable { path, reason }
            }
        };
        Self {
            pull_request,
            repository,
            root: root.into(),
            document,
        }
    }
}

/// A single compliance rule.
#[async_trait]
pub trait ComplianceRule: Send + Sync {
    fn id(&self) -> RuleId;

    fn name(&self) -> &'static str {
        self.id().name()
    }

    fn description(&self) -> &'static str;

    /// Evaluate the rule. An `Err` is turned into a failing outcome by the
    /// runner; it never aborts the other rules.
    async fn evaluate(&self, input: &RuleInput) -> Result<RuleOutcome, RuleError>;
}

/// Stands in for a rule that configuration switched off.
#[derive(Debug, Clone)]
pub struct SkippedRule {
    id: RuleId,
    reason: String,
}

impl SkippedRule {
    pub fn new(id: RuleId, reason: impl Into<String>) -> Self {
        Self {
            id,
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ComplianceRule for SkippedRule {
    fn id(&self) -> RuleId {
        self.id
    }

    fn description(&self) -> &'static str {
        "Disabled by configuration"
    }

    async fn evaluate(&self, _input: &RuleInput) -> Result<RuleOutcome, RuleError> {
        Ok(RuleOutcome::skipped(self.id, self.reason.clone()))
    }
}
