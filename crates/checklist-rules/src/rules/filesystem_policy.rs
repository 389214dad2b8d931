//! Forbidden-directory rule.

use std::sync::Arc;

use async_trait::async_trait;

use checklist_core::config::FilesystemConfig;
use checklist_core::errors::RuleError;
use checklist_core::types::{RuleId, RuleOutcome, Violation};

use super::{ComplianceRule, RuleInput};
use crate::ports::DirectoryWalker;

/// Fails when any directory's base name is a forbidden token.
pub struct FilesystemPolicyRule {
    walker: Arc<dyn DirectoryWalker>,
    forbidden: Vec<String>,
    excluded: Vec<String>,
}

impl FilesystemPolicyRule {
    pub fn new(config: &FilesystemConfig, walker: Arc<dyn DirectoryWalker>) -> Self {
        Self {
            walker,
            forbidden: config.effective_forbidden(),
            excluded: config.effective_excluded(),
        }
    }

    fn is_forbidden(&self, name: &str) -> bool {
        self.forbidden.iter().any(|f| f.eq_ignore_ascii_case(name))
    }
}

#[async_trait]
impl ComplianceRule for FilesystemPolicyRule {
    fn id(&self) -> RuleId {
        RuleId::FilesystemPolicy
    }

    fn description(&self) -> &'static str {
        "Verifies no forbidden directories exist in the repository"
    }

    async fn evaluate(&self, input: &RuleInput) -> Result<RuleOutcome, RuleError> {
        let walk = self.walker.walk_directories(&input.root, &self.excluded)?;

        let mut offending: Vec<String> = walk
            .directories
            .iter()
            .filter(|dir| {
                dir.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| self.is_forbidden(n))
            })
            .map(|dir| dir.to_string_lossy().replace('\\', "/"))
            .collect();
        offending.sort();

        let mut outcome = if offending.is_empty() {
            RuleOutcome::pass(
                RuleId::FilesystemPolicy,
                format!("No forbidden directories ({})", self.forbidden.join(", ")),
            )
        } else {
            let violations = offending
                .iter()
                .map(|path| {
                    Violation::new("forbidden-directory", format!("Forbidden directory: {path}"))
                })
                .collect();
            RuleOutcome::fail(
                RuleId::FilesystemPolicy,
                format!(
                    "Found {} forbidden director{}: {}",
                    offending.len(),
                    if offending.len() == 1 { "y" } else { "ies" },
                    offending.join(", ")
                ),
                violations,
            )
        };

        if !walk.skipped.is_empty() {
            outcome = outcome.with_note(format!(
                "{} path(s) could not be read and were skipped",
                walk.skipped.len()
            ));
        }

        Ok(outcome)
    }
}
