//! Console reporter: human-readable summary.

use checklist_core::types::{ComplianceReport, RuleStatus};

use super::Reporter;

/// Console reporter for human-readable log output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn status_symbol(&self, status: RuleStatus) -> &'static str {
        match status {
            RuleStatus::Pass => "✓",
            RuleStatus::Fail => "✗",
            RuleStatus::Warning => "⚠",
            RuleStatus::Skipped => "⊘",
        }
    }

    fn color_start(&self, status: RuleStatus) -> &'static str {
        if !self.use_color {
            return "";
        }
        match status {
            RuleStatus::Pass => "\x1b[32m",    // green
            RuleStatus::Fail => "\x1b[31m",    // red
            RuleStatus::Warning => "\x1b[33m", // yellow
            RuleStatus::Skipped => "\x1b[90m", // gray
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &ComplianceReport) -> Result<String, String> {
        let mut output = String::from("Repository compliance summary\n\n");

        for outcome in report.outcomes() {
            output.push_str(&format!(
                "{}{} {}{}: {}\n",
                self.color_start(outcome.status),
                self.status_symbol(outcome.status),
                outcome.rule_id.name(),
                self.color_end(),
                outcome.message
            ));
            if outcome.violations.len() > 1 {
                for violation in &outcome.violations {
                    output.push_str(&format!("    - [{}] {}\n", violation.code, violation.message));
                }
            }
            for note in &outcome.notes {
                output.push_str(&format!("    note: {note}\n"));
            }
        }

        output.push_str(&format!(
            "\n{} passed, {} failed, {} warnings, {} skipped: {}\n",
            report.count(RuleStatus::Pass),
            report.count(RuleStatus::Fail),
            report.count(RuleStatus::Warning),
            report.count(RuleStatus::Skipped),
            if report.passed() { "PASSED" } else { "FAILED" }
        ));

        Ok(output)
    }
}
