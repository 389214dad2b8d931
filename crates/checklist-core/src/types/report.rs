//! The aggregated compliance report.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::outcome::{RuleId, RuleOutcome, RuleStatus};

/// Ordered rule outcomes plus the derived overall verdict.
///
/// `passed` is computed once at construction: true iff no outcome failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    passed: bool,
    outcomes: Vec<RuleOutcome>,
    /// The compliance document was found and document validation ran.
    #[serde(default)]
    document_found: bool,
}

impl ComplianceReport {
    pub fn new(outcomes: Vec<RuleOutcome>) -> Self {
        let passed = outcomes.iter().all(|o| !o.is_failure());
        Self {
            passed,
            outcomes,
            document_found: false,
        }
    }

    /// Record whether the compliance document was found and checked.
    pub fn with_document_found(mut self, found: bool) -> Self {
        self.document_found = found;
        self
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn document_found(&self) -> bool {
        self.document_found
    }

    /// Outcomes in declared rule order.
    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.outcomes
    }

    pub fn outcome(&self, rule_id: RuleId) -> Option<&RuleOutcome> {
        self.outcomes.iter().find(|o| o.rule_id == rule_id)
    }

    pub fn count(&self, status: RuleStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn failed_rules(&self) -> Vec<RuleId> {
        self.outcomes
            .iter()
            .filter(|o| o.is_failure())
            .map(|o| o.rule_id)
            .collect()
    }

    /// The historical `results` output: `true` for pass or warning, `false`
    /// for fail, `null` for rules that did not run. `readmeExistence` is
    /// `true` when the document was found and checked, `null` otherwise.
    pub fn legacy_results(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "readmeExistence".to_string(),
            if self.document_found {
                Value::Bool(true)
            } else {
                Value::Null
            },
        );
        for outcome in &self.outcomes {
            let value = match outcome.status {
                RuleStatus::Pass | RuleStatus::Warning => Value::Bool(true),
                RuleStatus::Fail => Value::Bool(false),
                RuleStatus::Skipped => Value::Null,
            };
            map.insert(outcome.rule_id.legacy_key().to_string(), value);
        }
        Value::Object(map)
    }
}
