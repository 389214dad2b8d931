//! JSON reporter: the full structured report.

use serde_json::json;

use checklist_core::types::{ComplianceReport, RuleStatus};

use super::Reporter;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &ComplianceReport) -> Result<String, String> {
        let rules: Vec<serde_json::Value> = report
            .outcomes()
            .iter()
            .map(|o| {
                json!({
                    "rule_id": o.rule_id,
                    "rule_name": o.rule_id.name(),
                    "status": o.status,
                    "message": o.message,
                    "violations": o.violations,
                    "notes": o.notes,
                })
            })
            .collect();

        let output = json!({
            "passed": report.passed(),
            "summary": {
                "total": report.outcomes().len(),
                "passed": report.count(RuleStatus::Pass),
                "failed": report.count(RuleStatus::Fail),
                "warnings": report.count(RuleStatus::Warning),
                "skipped": report.count(RuleStatus::Skipped),
            },
            "rules": rules,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
