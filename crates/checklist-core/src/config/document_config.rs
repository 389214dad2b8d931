//! Compliance document configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the document template rule.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DocumentConfig {
    /// Document path relative to the repository root. Default: `README.md`.
    pub path: Option<String>,
    /// Title line prefix. Default: `# ESB_`.
    pub title_prefix: Option<String>,
    /// Required section markers, in template order.
    pub required_sections: Vec<String>,
    /// Superseded host fragment. Default: `boc200`.
    pub deprecated_host: Option<String>,
    /// Successor of the deprecated host. Default: `boc201`.
    pub replacement_host: Option<String>,
    /// Skip document and execution-group validation. Default: false.
    pub skip_validation: Option<bool>,
}

impl DocumentConfig {
    pub fn effective_path(&self) -> &str {
        self.path.as_deref().unwrap_or(constants::DEFAULT_DOCUMENT_PATH)
    }

    pub fn effective_title_prefix(&self) -> &str {
        self.title_prefix
            .as_deref()
            .unwrap_or(constants::DEFAULT_TITLE_PREFIX)
    }

    pub fn effective_required_sections(&self) -> Vec<String> {
        if self.required_sections.is_empty() {
            super::owned(constants::DEFAULT_REQUIRED_SECTIONS)
        } else {
            self.required_sections.clone()
        }
    }

    pub fn effective_deprecated_host(&self) -> &str {
        self.deprecated_host
            .as_deref()
            .unwrap_or(constants::DEFAULT_DEPRECATED_HOST)
    }

    pub fn effective_replacement_host(&self) -> &str {
        self.replacement_host
            .as_deref()
            .unwrap_or(constants::DEFAULT_REPLACEMENT_HOST)
    }

    pub fn effective_skip_validation(&self) -> bool {
        self.skip_validation.unwrap_or(false)
    }
}
