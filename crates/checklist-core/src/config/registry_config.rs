//! Central execution-group registry configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Where the central properties file lives and how its keys are formed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub path: Option<String>,
    pub git_ref: Option<String>,
    /// Key prefix; keys read `<prefix>_<service>.Transactional`.
    pub key_prefix: Option<String>,
    /// Sub-prefix stripped from the service identifier in the title.
    pub service_sub_prefix: Option<String>,
    /// Phrase that introduces the declared groups in the document.
    pub groups_phrase: Option<String>,
}

impl RegistryConfig {
    pub fn effective_owner(&self) -> &str {
        self.owner.as_deref().unwrap_or(constants::DEFAULT_REGISTRY_OWNER)
    }

    pub fn effective_repo(&self) -> &str {
        self.repo.as_deref().unwrap_or(constants::DEFAULT_REGISTRY_REPO)
    }

    pub fn effective_path(&self) -> &str {
        self.path.as_deref().unwrap_or(constants::DEFAULT_REGISTRY_PATH)
    }

    pub fn effective_ref(&self) -> &str {
        self.git_ref.as_deref().unwrap_or(constants::DEFAULT_REGISTRY_REF)
    }

    pub fn effective_key_prefix(&self) -> &str {
        self.key_prefix
            .as_deref()
            .unwrap_or(constants::DEFAULT_REGISTRY_KEY_PREFIX)
    }

    pub fn effective_service_sub_prefix(&self) -> &str {
        self.service_sub_prefix
            .as_deref()
            .unwrap_or(constants::DEFAULT_SERVICE_SUB_PREFIX)
    }

    pub fn effective_groups_phrase(&self) -> &str {
        self.groups_phrase
            .as_deref()
            .unwrap_or(constants::DEFAULT_GROUPS_PHRASE)
    }
}
