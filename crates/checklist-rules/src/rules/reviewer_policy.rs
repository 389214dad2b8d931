//! Reviewer and route policy rule.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use checklist_core::config::{ReviewConfig, RouteConfig};
use checklist_core::errors::RuleError;
use checklist_core::types::{PullRequestContext, RuleId, RuleOutcome};

use super::{ComplianceRule, RuleInput};
use crate::ports::CommentLister;

/// Enforces authorized reviewers on gated routes and the emergency
/// exception on the feature route.
pub struct ReviewerPolicyRule {
    lister: Option<Arc<dyn CommentLister>>,
    reviewers: Vec<String>,
    gated_routes: Vec<RouteConfig>,
    exception_source_prefix: String,
    exception_target: String,
    exception_marker: String,
    strict_exception: bool,
}

impl ReviewerPolicyRule {
    pub fn new(config: &ReviewConfig, lister: Option<Arc<dyn CommentLister>>) -> Self {
        Self {
            lister,
            reviewers: config.effective_reviewers(),
            gated_routes: config.effective_gated_routes(),
            exception_source_prefix: config.effective_exception_source_prefix().to_string(),
            exception_target: config.effective_exception_target().to_string(),
            exception_marker: config.effective_exception_marker().to_string(),
            strict_exception: config.effective_strict_exception(),
        }
    }

    fn is_exception_route(&self, source: &str, target: &str) -> bool {
        source.starts_with(&self.exception_source_prefix) && target == self.exception_target
    }

    fn gated(&self, pr: &PullRequestContext) -> RuleOutcome {
        let route = format!("{} -> {}", pr.head_ref(), pr.base_ref());
        if pr.has_reviewer_in(&self.reviewers) {
            RuleOutcome::pass(
                RuleId::ReviewerPolicy,
                format!("Route {route} has an authorized reviewer"),
            )
        } else {
            RuleOutcome::fail_single(
                RuleId::ReviewerPolicy,
                "missing-authorized-reviewer",
                format!(
                    "Route {route} requires one of the authorized reviewers: {}",
                    self.reviewers.join(", ")
                ),
            )
        }
    }

    /// Outcome when comments cannot be consulted at all.
    fn comments_unavailable(&self, route: &str, why: &str) -> RuleOutcome {
        let message = format!("Route {route}: {why}; emergency exception not verified");
        if self.strict_exception {
            RuleOutcome::warning(RuleId::ReviewerPolicy, message)
        } else {
            RuleOutcome::pass(
                RuleId::ReviewerPolicy,
                format!("Route {route} has no authorized reviewer"),
            )
            .with_note(message)
        }
    }

    async fn exception(&self, input: &RuleInput, pr: &PullRequestContext) -> RuleOutcome {
        let id = RuleId::ReviewerPolicy;
        let route = format!("{} -> {}", pr.head_ref(), pr.base_ref());

        if pr.has_reviewer_in(&self.reviewers) {
            return RuleOutcome::pass(id, format!("Route {route} has an authorized reviewer"));
        }

        let Some(lister) = &self.lister else {
            return self.comments_unavailable(&route, "no token to read comments");
        };
        let Some(repository) = &input.repository else {
            return self.comments_unavailable(&route, "repository unknown");
        };

        let comments = match lister.list_comments(repository, pr.number()).await {
            Ok(comments) => comments,
            Err(e) => {
                warn!(error = %e, "cannot list pull request comments");
                return RuleOutcome::warning(
                    id,
                    format!("Route {route}: cannot read comments to verify the exception: {e}"),
                );
            }
        };

        debug!(count = comments.len(), "searching comments for exception marker");
        if comments.iter().any(|c| c.contains(&self.exception_marker)) {
            return RuleOutcome::pass(id, format!("Route {route} approved by exception"))
                .with_note("Emergency exception applied");
        }

        if self.strict_exception {
            RuleOutcome::fail_single(
                id,
                "missing-exception",
                format!(
                    "Route {route} requires an authorized reviewer or a comment containing \"{}\"",
                    self.exception_marker
                ),
            )
        } else {
            RuleOutcome::pass(
                id,
                format!("Route {route} has no authorized reviewer and no exception comment"),
            )
        }
    }
}

#[async_trait]
impl ComplianceRule for ReviewerPolicyRule {
    fn id(&self) -> RuleId {
        RuleId::ReviewerPolicy
    }

    fn description(&self) -> &'static str {
        "Verifies reviewers required by the branch route"
    }

    async fn evaluate(&self, input: &RuleInput) -> Result<RuleOutcome, RuleError> {
        let Some(pr) = &input.pull_request else {
            return Ok(RuleOutcome::skipped(
                RuleId::ReviewerPolicy,
                "Not a pull request event; no route to check",
            ));
        };

        let (source, target) = (pr.head_ref(), pr.base_ref());
        if self.gated_routes.iter().any(|r| r.matches(source, target)) {
            return Ok(self.gated(pr));
        }
        if self.is_exception_route(source, target) {
            return Ok(self.exception(input, pr).await);
        }

        Ok(RuleOutcome::skipped(
            RuleId::ReviewerPolicy,
            format!("Route {source} -> {target} has no reviewer policy"),
        ))
    }
}
