//! Document template rule.

use async_trait::async_trait;

use checklist_core::config::DocumentConfig;
use checklist_core::errors::{DocumentError, RuleError};
use checklist_core::types::{RuleId, RuleOutcome, Violation};

use super::{ComplianceRule, DocumentSlot, RuleInput};
use crate::parsing::{deprecated_host_lines, has_section, is_placeholder_title, title_remainder};

/// Checks the compliance document against the template: required sections,
/// a real title, and no deprecated host.
pub struct DocumentTemplateRule {
    title_prefix: String,
    required_sections: Vec<String>,
    deprecated_host: String,
    replacement_host: String,
}

impl DocumentTemplateRule {
    pub fn new(config: &DocumentConfig) -> Self {
        Self {
            title_prefix: config.effective_title_prefix().to_string(),
            required_sections: config.effective_required_sections(),
            deprecated_host: config.effective_deprecated_host().to_string(),
            replacement_host: config.effective_replacement_host().to_string(),
        }
    }
}

#[async_trait]
impl ComplianceRule for DocumentTemplateRule {
    fn id(&self) -> RuleId {
        RuleId::DocumentTemplate
    }

    fn description(&self) -> &'static str {
        "Verifies the compliance document follows the service template"
    }

    async fn evaluate(&self, input: &RuleInput) -> Result<RuleOutcome, RuleError> {
        let document = match &input.document {
            DocumentSlot::Loaded(doc) => doc,
            DocumentSlot::Missing { path } => {
                return Ok(RuleOutcome::fail_single(
                    RuleId::DocumentTemplate,
                    "document-missing",
                    format!("Compliance document {path} does not exist"),
                ));
            }
            DocumentSlot::Unreadable { path, reason } => {
                return Err(DocumentError::Unreadable {
                    path: path.clone(),
                    reason: reason.clone(),
                }
                .into());
            }
        };

        let mut violations = Vec::new();

        for section in &self.required_sections {
            if !has_section(document, section) {
                violations.push(Violation::new(
                    "missing-section",
                    format!("Missing required section: {section}"),
                ));
            }
        }

        match title_remainder(document, &self.title_prefix) {
            Some(rest) if is_placeholder_title(rest) => {
                violations.push(Violation::new(
                    "placeholder-title",
                    format!(
                        "Title '{}{}' is a template placeholder; set the service name",
                        self.title_prefix,
                        rest.trim_end()
                    ),
                ));
            }
            Some(_) => {}
            // Already reported as a missing section when the prefix is required.
            None if !self.required_sections.contains(&self.title_prefix) => {
                violations.push(Violation::new(
                    "missing-title",
                    format!("No title line starting with '{}'", self.title_prefix),
                ));
            }
            None => {}
        }

        let lines = deprecated_host_lines(document, &self.deprecated_host);
        if !lines.is_empty() {
            let numbers: Vec<String> = lines.iter().map(|n| n.to_string()).collect();
            violations.push(Violation::new(
                "deprecated-host",
                format!(
                    "Deprecated host '{}' found on line(s) {}; use '{}' instead",
                    self.deprecated_host,
                    numbers.join(", "),
                    self.replacement_host
                ),
            ));
        }

        if violations.is_empty() {
            Ok(RuleOutcome::pass(
                RuleId::DocumentTemplate,
                format!("{} follows the template", document.path()),
            ))
        } else {
            Ok(RuleOutcome::fail(
                RuleId::DocumentTemplate,
                format!(
                    "{} has {} template violation(s)",
                    document.path(),
                    violations.len()
                ),
                violations,
            ))
        }
    }
}
