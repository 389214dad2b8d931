//! Repository layout configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the forbidden-folder scan.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilesystemConfig {
    /// Directory names that must not exist anywhere. Default: `bd`.
    pub forbidden_dir_names: Vec<String>,
    /// Directory names the walk never enters. Default: `.git`, `node_modules`.
    pub excluded_dir_names: Vec<String>,
}

impl FilesystemConfig {
    pub fn effective_forbidden(&self) -> Vec<String> {
        if self.forbidden_dir_names.is_empty() {
            super::owned(constants::DEFAULT_FORBIDDEN_DIRS)
        } else {
            self.forbidden_dir_names.clone()
        }
    }

    pub fn effective_excluded(&self) -> Vec<String> {
        if self.excluded_dir_names.is_empty() {
            super::owned(constants::DEFAULT_EXCLUDED_DIRS)
        } else {
            self.excluded_dir_names.clone()
        }
    }
}
