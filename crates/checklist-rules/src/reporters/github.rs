//! GitHub Actions reporter: workflow commands that become run annotations.
//!
//! Each violation is an `::error`, each warning outcome or note a
//! `::warning`, and each skipped rule a `::notice`.

use checklist_core::types::{ComplianceReport, RuleStatus};

use super::Reporter;

pub struct GitHubCommandsReporter;

impl GitHubCommandsReporter {
    pub fn new() -> Self {
        Self
    }

    fn command(level: &str, title: &str, message: &str) -> String {
        format!(
            "::{level} title={}::{}\n",
            escape_property(title),
            escape_data(message)
        )
    }
}

impl Default for GitHubCommandsReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for GitHubCommandsReporter {
    fn name(&self) -> &'static str {
        "github"
    }

    fn generate(&self, report: &ComplianceReport) -> Result<String, String> {
        let mut output = String::new();

        for outcome in report.outcomes() {
            let title = outcome.rule_id.name();
            match outcome.status {
                RuleStatus::Fail if outcome.violations.is_empty() => {
                    output.push_str(&Self::command("error", title, &outcome.message));
                }
                RuleStatus::Fail => {
                    for violation in &outcome.violations {
                        output.push_str(&Self::command("error", title, &violation.message));
                    }
                }
                RuleStatus::Warning => {
                    output.push_str(&Self::command("warning", title, &outcome.message));
                }
                RuleStatus::Skipped => {
                    output.push_str(&Self::command("notice", title, &outcome.message));
                }
                RuleStatus::Pass => {}
            }
            for note in &outcome.notes {
                output.push_str(&Self::command("warning", title, note));
            }
        }

        Ok(output)
    }
}

/// Escape a workflow command message.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value.
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
