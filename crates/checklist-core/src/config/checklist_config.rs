//! Top-level checklist configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BranchConfig, DocumentConfig, FilesystemConfig, RegistryConfig, ReviewConfig};
use crate::errors::ConfigError;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV_VAR: &str = "CHECKLIST_CONFIG";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Action inputs (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CHECKLIST_*`)
/// 3. Config file (explicit path, or `CHECKLIST_CONFIG`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChecklistConfig {
    pub branch: BranchConfig,
    pub document: DocumentConfig,
    pub filesystem: FilesystemConfig,
    pub registry: RegistryConfig,
    pub review: ReviewConfig,
}

/// Overrides coming from the action's inputs.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub skip_document_validation: Option<bool>,
    pub document_path: Option<String>,
}

impl ChecklistConfig {
    /// Load configuration with layered resolution.
    ///
    /// `config_file` wins over `CHECKLIST_CONFIG`. A file that was asked for
    /// but does not exist is an error; running without any file is not.
    pub fn load(
        config_file: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: config file
        let env_path = std::env::var_os(CONFIG_PATH_ENV_VAR).map(std::path::PathBuf::from);
        if let Some(path) = config_file.map(Path::to_path_buf).or(env_path) {
            Self::merge_toml_file(&mut config, &path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): action inputs
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// Empty lists fall back to defaults, so only blank entries and blank
    /// explicit strings are rejected.
    pub fn validate(config: &ChecklistConfig) -> Result<(), ConfigError> {
        blank_entries("branch.allowed_prefixes", &config.branch.allowed_prefixes)?;
        blank_entries("document.required_sections", &config.document.required_sections)?;
        blank_entries(
            "filesystem.forbidden_dir_names",
            &config.filesystem.forbidden_dir_names,
        )?;
        blank_entries(
            "filesystem.excluded_dir_names",
            &config.filesystem.excluded_dir_names,
        )?;
        blank_entries(
            "review.authorized_reviewers",
            &config.review.authorized_reviewers,
        )?;

        blank_value("document.title_prefix", config.document.title_prefix.as_deref())?;
        blank_value("document.path", config.document.path.as_deref())?;
        blank_value("registry.key_prefix", config.registry.key_prefix.as_deref())?;
        blank_value("registry.groups_phrase", config.registry.groups_phrase.as_deref())?;
        blank_value("review.exception_marker", config.review.exception_marker.as_deref())?;

        if config
            .branch
            .allowed_prefixes
            .iter()
            .any(|p| p.contains('/'))
        {
            return Err(ConfigError::ValidationFailed {
                field: "branch.allowed_prefixes".to_string(),
                message: "prefixes must not contain '/'".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ChecklistConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ChecklistConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value or a non-empty list.
    fn merge(base: &mut ChecklistConfig, other: &ChecklistConfig) {
        // Branch
        if !other.branch.allowed_prefixes.is_empty() {
            base.branch.allowed_prefixes = other.branch.allowed_prefixes.clone();
        }

        // Document
        if other.document.path.is_some() {
            base.document.path = other.document.path.clone();
        }
        if other.document.title_prefix.is_some() {
            base.document.title_prefix = other.document.title_prefix.clone();
        }
        if !other.document.required_sections.is_empty() {
            base.document.required_sections = other.document.required_sections.clone();
        }
        if other.document.deprecated_host.is_some() {
            base.document.deprecated_host = other.document.deprecated_host.clone();
        }
        if other.document.replacement_host.is_some() {
            base.document.replacement_host = other.document.replacement_host.clone();
        }
        if other.document.skip_validation.is_some() {
            base.document.skip_validation = other.document.skip_validation;
        }

        // Filesystem
        if !other.filesystem.forbidden_dir_names.is_empty() {
            base.filesystem.forbidden_dir_names = other.filesystem.forbidden_dir_names.clone();
        }
        if !other.filesystem.excluded_dir_names.is_empty() {
            base.filesystem.excluded_dir_names = other.filesystem.excluded_dir_names.clone();
        }

        // Registry
        if other.registry.owner.is_some() {
            base.registry.owner = other.registry.owner.clone();
        }
        if other.registry.repo.is_some() {
            base.registry.repo = other.registry.repo.clone();
        }
        if other.registry.path.is_some() {
            base.registry.path = other.registry.path.clone();
        }
        if other.registry.git_ref.is_some() {
            base.registry.git_ref = other.registry.git_ref.clone();
        }
        if other.registry.key_prefix.is_some() {
            base.registry.key_prefix = other.registry.key_prefix.clone();
        }
        if other.registry.service_sub_prefix.is_some() {
            base.registry.service_sub_prefix = other.registry.service_sub_prefix.clone();
        }
        if other.registry.groups_phrase.is_some() {
            base.registry.groups_phrase = other.registry.groups_phrase.clone();
        }

        // Review
        if !other.review.authorized_reviewers.is_empty() {
            base.review.authorized_reviewers = other.review.authorized_reviewers.clone();
        }
        if !other.review.gated_routes.is_empty() {
            base.review.gated_routes = other.review.gated_routes.clone();
        }
        if other.review.exception_source_prefix.is_some() {
            base.review.exception_source_prefix = other.review.exception_source_prefix.clone();
        }
        if other.review.exception_target.is_some() {
            base.review.exception_target = other.review.exception_target.clone();
        }
        if other.review.exception_marker.is_some() {
            base.review.exception_marker = other.review.exception_marker.clone();
        }
        if other.review.strict_exception.is_some() {
            base.review.strict_exception = other.review.strict_exception;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CHECKLIST_DOCUMENT_PATH`, `CHECKLIST_REGISTRY_REF`, etc.
    fn apply_env_overrides(config: &mut ChecklistConfig) {
        if let Ok(val) = std::env::var("CHECKLIST_DOCUMENT_PATH") {
            if !val.trim().is_empty() {
                config.document.path = Some(val);
            }
        }
        if let Ok(val) = std::env::var("CHECKLIST_SKIP_DOCUMENT_VALIDATION") {
            if let Ok(v) = val.trim().parse::<bool>() {
                config.document.skip_validation = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CHECKLIST_REGISTRY_REF") {
            if !val.trim().is_empty() {
                config.registry.git_ref = Some(val);
            }
        }
        if let Ok(val) = std::env::var("CHECKLIST_REVIEW_STRICT_EXCEPTION") {
            if let Ok(v) = val.trim().parse::<bool>() {
                config.review.strict_exception = Some(v);
            }
        }
    }

    /// Apply action-input overrides (highest priority).
    fn apply_cli_overrides(config: &mut ChecklistConfig, cli: &CliOverrides) {
        if let Some(v) = cli.skip_document_validation {
            config.document.skip_validation = Some(v);
        }
        if let Some(ref v) = cli.document_path {
            config.document.path = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn blank_entries(field: &str, values: &[String]) -> Result<(), ConfigError> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "entries must not be blank".to_string(),
        });
    }
    Ok(())
}

fn blank_value(field: &str, value: Option<&str>) -> Result<(), ConfigError> {
    if value.is_some_and(|v| v.trim().is_empty()) {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must not be blank".to_string(),
        });
    }
    Ok(())
}
