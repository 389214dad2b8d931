//! Branch naming rule.

use async_trait::async_trait;

use checklist_core::config::BranchConfig;
use checklist_core::errors::RuleError;
use checklist_core::types::{RuleId, RuleOutcome};

use super::{ComplianceRule, RuleInput};
use crate::parsing::is_valid_branch_name;

/// Checks that the source branch follows `<prefix>/<suffix>`.
pub struct BranchNameRule {
    prefixes: Vec<String>,
}

impl BranchNameRule {
    pub fn new(config: &BranchConfig) -> Self {
        Self {
            prefixes: config.effective_prefixes(),
        }
    }
}

#[async_trait]
impl ComplianceRule for BranchNameRule {
    fn id(&self) -> RuleId {
        RuleId::BranchName
    }

    fn description(&self) -> &'static str {
        "Verifies that the source branch name uses an allowed prefix"
    }

    async fn evaluate(&self, input: &RuleInput) -> Result<RuleOutcome, RuleError> {
        let Some(pr) = &input.pull_request else {
            return Ok(RuleOutcome::skipped(
                RuleId::BranchName,
                "Not a pull request event; no branch to check",
            ));
        };

        let branch = pr.head_ref();
        if is_valid_branch_name(branch, &self.prefixes) {
            Ok(RuleOutcome::pass(
                RuleId::BranchName,
                format!("Branch '{branch}' follows the naming convention"),
            ))
        } else {
            Ok(RuleOutcome::fail_single(
                RuleId::BranchName,
                "invalid-branch-name",
                format!(
                    "Branch '{branch}' does not follow the naming convention. \
                     Valid prefixes: {}",
                    self.prefixes
                        .iter()
                        .map(|p| format!("{p}/"))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ))
        }
    }
}
