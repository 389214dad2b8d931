//! Execution-group reconciliation against the central registry.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use checklist_core::config::RegistryConfig;
use checklist_core::errors::RuleError;
use checklist_core::types::{GroupSet, RuleId, RuleOutcome, Violation};

use super::{ComplianceRule, RuleInput};
use crate::parsing::{declared_groups, lookup, parse_properties, service_identifier};
use crate::ports::{ContentFetcher, RemoteFile};

/// Compares the groups declared in the document with the central registry.
pub struct GroupReconciliationRule {
    fetcher: Option<Arc<dyn ContentFetcher>>,
    registry: RemoteFile,
    title_prefix: String,
    key_prefix: String,
    service_sub_prefix: String,
    groups_phrase: String,
}

impl GroupReconciliationRule {
    pub fn new(
        registry: &RegistryConfig,
        title_prefix: &str,
        fetcher: Option<Arc<dyn ContentFetcher>>,
    ) -> Self {
        Self {
            fetcher,
            registry: RemoteFile {
                owner: registry.effective_owner().to_string(),
                repo: registry.effective_repo().to_string(),
                path: registry.effective_path().to_string(),
                git_ref: registry.effective_ref().to_string(),
            },
            title_prefix: title_prefix.to_string(),
            key_prefix: registry.effective_key_prefix().to_string(),
            service_sub_prefix: registry.effective_service_sub_prefix().to_string(),
            groups_phrase: registry.effective_groups_phrase().to_string(),
        }
    }
}

#[async_trait]
impl ComplianceRule for GroupReconciliationRule {
    fn id(&self) -> RuleId {
        RuleId::GroupReconciliation
    }

    fn description(&self) -> &'static str {
        "Verifies declared execution groups match the central registry"
    }

    async fn evaluate(&self, input: &RuleInput) -> Result<RuleOutcome, RuleError> {
        let id = RuleId::GroupReconciliation;

        let Some(fetcher) = &self.fetcher else {
            return Ok(RuleOutcome::skipped(
                id,
                "No configuration token provided; execution groups not checked",
            ));
        };
        let Some(document) = input.document.document() else {
            return Ok(RuleOutcome::skipped(
                id,
                "Compliance document unavailable; execution groups not checked",
            ));
        };

        let Some(service) =
            service_identifier(document, &self.title_prefix, &self.service_sub_prefix)
        else {
            return Ok(RuleOutcome::fail_single(
                id,
                "unknown-service",
                "Cannot determine service identifier from the document title",
            ));
        };

        let Some(declared) = declared_groups(document, &self.groups_phrase) else {
            return Ok(RuleOutcome::warning(
                id,
                format!("Phrase \"{}\" not found in the document", self.groups_phrase),
            ));
        };

        let listing = fetcher
            .fetch(&self.registry)
            .await
            .and_then(|content| content.decode());
        let listing = match listing {
            Ok(text) => text,
            Err(e) => {
                debug!(resource = %self.registry.display_name(), error = %e, "registry fetch failed");
                return Ok(RuleOutcome::fail_single(
                    id,
                    "config-download-failed",
                    format!(
                        "Cannot download central configuration {}: {e}",
                        self.registry.display_name()
                    ),
                ));
            }
        };

        let properties = parse_properties(&listing);
        let transactional_key = format!("{}_{service}.Transactional", self.key_prefix);
        let notification_key = format!("{}_{service}.Notification", self.key_prefix);
        let transactional = lookup(&properties, &transactional_key);
        let notification = lookup(&properties, &notification_key);

        if transactional.is_none() && notification.is_none() {
            return Ok(RuleOutcome::fail_single(
                id,
                "missing-registry-entry",
                format!(
                    "Neither {transactional_key} nor {notification_key} exists in the central configuration"
                ),
            ));
        }

        let mut registered = GroupSet::new();
        for value in [transactional, notification].into_iter().flatten() {
            registered.extend_from(&GroupSet::parse_csv(value));
        }

        let missing_in_config = declared.missing_from(&registered);
        let missing_in_document = registered.missing_from(&declared);

        let mut violations = Vec::new();
        if !missing_in_config.is_empty() {
            violations.push(Violation::new(
                "missing-in-configuration",
                format!(
                    "Groups in the document but not in the configuration: {}",
                    missing_in_config.join(", ")
                ),
            ));
        }
        if !missing_in_document.is_empty() {
            violations.push(Violation::new(
                "missing-in-document",
                format!(
                    "Groups in the configuration but not in the document: {}",
                    missing_in_document.join(", ")
                ),
            ));
        }

        if violations.is_empty() {
            Ok(RuleOutcome::pass(
                id,
                format!("Execution groups for {service} match: {declared}"),
            ))
        } else {
            Ok(RuleOutcome::fail(
                id,
                format!("Execution groups for {service} do not match the central configuration"),
                violations,
            ))
        }
    }
}
