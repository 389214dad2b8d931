//! Reviewer and route policy configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// A `source -> target` branch transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub source: String,
    pub target: String,
}

impl RouteConfig {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn matches(&self, source: &str, target: &str) -> bool {
        self.source == source && self.target == target
    }
}

/// Configuration for the reviewer policy rule.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReviewConfig {
    /// Logins allowed to approve gated routes.
    pub authorized_reviewers: Vec<String>,
    /// Transitions that require an authorized reviewer.
    pub gated_routes: Vec<RouteConfig>,
    /// Source branch prefix of the emergency-exception route. Default: `feature/`.
    pub exception_source_prefix: Option<String>,
    /// Target branch of the emergency-exception route. Default: `develop`.
    pub exception_target: Option<String>,
    /// Comment marker that grants the exception.
    pub exception_marker: Option<String>,
    /// Require a reviewer or an exception comment on the exception route.
    /// Default: false.
    pub strict_exception: Option<bool>,
}

impl ReviewConfig {
    pub fn effective_reviewers(&self) -> Vec<String> {
        if self.authorized_reviewers.is_empty() {
            super::owned(constants::DEFAULT_AUTHORIZED_REVIEWERS)
        } else {
            self.authorized_reviewers.clone()
        }
    }

    pub fn effective_gated_routes(&self) -> Vec<RouteConfig> {
        if self.gated_routes.is_empty() {
            constants::DEFAULT_GATED_ROUTES
                .iter()
                .map(|(source, target)| RouteConfig::new(*source, *target))
                .collect()
        } else {
            self.gated_routes.clone()
        }
    }

    pub fn effective_exception_source_prefix(&self) -> &str {
        self.exception_source_prefix
            .as_deref()
            .unwrap_or(constants::DEFAULT_EXCEPTION_SOURCE_PREFIX)
    }

    pub fn effective_exception_target(&self) -> &str {
        self.exception_target
            .as_deref()
            .unwrap_or(constants::DEFAULT_EXCEPTION_TARGET)
    }

    pub fn effective_exception_marker(&self) -> &str {
        self.exception_marker
            .as_deref()
            .unwrap_or(constants::DEFAULT_EXCEPTION_MARKER)
    }

    pub fn effective_strict_exception(&self) -> bool {
        self.strict_exception.unwrap_or(false)
    }
}
