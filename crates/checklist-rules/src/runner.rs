//! Compliance runner: evaluates every rule and assembles the report.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::future::join_all;
use futures::FutureExt;
use tracing::{info, warn};

use checklist_core::config::ChecklistConfig;
use checklist_core::errors::{ChecklistErrorCode, RuleError};
use checklist_core::types::{ComplianceReport, RuleId, RuleOutcome};

use crate::ports::Collaborators;
use crate::rules::{
    BranchNameRule, ComplianceRule, DocumentSlot, DocumentTemplateRule, FilesystemPolicyRule,
    GroupReconciliationRule, ReviewerPolicyRule, RuleInput, SkippedRule,
};

/// Runs rules concurrently on the current task and reports in declared order.
pub struct ComplianceRunner {
    rules: Vec<Box<dyn ComplianceRule>>,
    /// False when configuration switched document validation off.
    validates_document: bool,
}

impl ComplianceRunner {
    /// The five default rules, configured from `config`.
    pub fn from_config(config: &ChecklistConfig, collaborators: Collaborators) -> Self {
        let skip_document = config.document.effective_skip_validation();
        let skip_reason = "Document validation disabled by configuration";

        let document_rule: Box<dyn ComplianceRule> = if skip_document {
            Box::new(SkippedRule::new(RuleId::DocumentTemplate, skip_reason))
        } else {
            Box::new(DocumentTemplateRule::new(&config.document))
        };
        let groups_rule: Box<dyn ComplianceRule> = if skip_document {
            Box::new(SkippedRule::new(RuleId::GroupReconciliation, skip_reason))
        } else {
            Box::new(GroupReconciliationRule::new(
                &config.registry,
                config.document.effective_title_prefix(),
                collaborators.content_fetcher.clone(),
            ))
        };

        let rules: Vec<Box<dyn ComplianceRule>> = vec![
            Box::new(BranchNameRule::new(&config.branch)),
            document_rule,
            Box::new(FilesystemPolicyRule::new(
                &config.filesystem,
                collaborators.walker.clone(),
            )),
            groups_rule,
            Box::new(ReviewerPolicyRule::new(
                &config.review,
                collaborators.comment_lister.clone(),
            )),
        ];
        Self {
            rules,
            validates_document: !skip_document,
        }
    }

    /// A runner over custom rules, reported in the given order.
    pub fn with_rules(rules: Vec<Box<dyn ComplianceRule>>) -> Self {
        Self {
            rules,
            validates_document: true,
        }
    }

    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Evaluate every rule. Never fails: rule errors and panics become
    /// failing outcomes for that rule only.
    pub async fn run(&self, input: &RuleInput) -> ComplianceReport {
        let outcomes = join_all(self.rules.iter().map(|rule| run_rule(rule.as_ref(), input))).await;
        let document_found =
            self.validates_document && matches!(input.document, DocumentSlot::Loaded(_));
        let report = ComplianceReport::new(outcomes).with_document_found(document_found);
        info!(
            passed = report.passed(),
            failed = report.failed_rules().len(),
            "compliance run complete"
        );
        report
    }
}

async fn run_rule(rule: &dyn ComplianceRule, input: &RuleInput) -> RuleOutcome {
    let id = rule.id();
    let result = AssertUnwindSafe(rule.evaluate(input))
        .catch_unwind()
        .await
        .unwrap_or_else(|payload| Err(RuleError::Panicked(panic_message(payload.as_ref()))));

    match result {
        Ok(mut outcome) => {
            outcome.rule_id = id;
            info!(rule = %id, status = %outcome.status, "{}", outcome.message);
            outcome
        }
        Err(e) => {
            warn!(rule = %id, error = %e.coded_string(), "rule errored");
            RuleOutcome::fail_single(
                id,
                "rule-error",
                format!("{} could not complete: {}", rule.name(), e.coded_string()),
            )
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
