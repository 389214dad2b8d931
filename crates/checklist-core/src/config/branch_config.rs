//! Branch naming configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the branch naming rule.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BranchConfig {
    /// Accepted branch prefixes. Default: feature, bugfix, hotfix, release.
    pub allowed_prefixes: Vec<String>,
}

impl BranchConfig {
    pub fn effective_prefixes(&self) -> Vec<String> {
        if self.allowed_prefixes.is_empty() {
            super::owned(constants::DEFAULT_BRANCH_PREFIXES)
        } else {
            self.allowed_prefixes.clone()
        }
    }
}
