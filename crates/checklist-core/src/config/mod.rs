//! Configuration system for the checklist.
//! TOML-based, 4-layer resolution: action inputs > env > config file > defaults.

pub mod branch_config;
pub mod checklist_config;
pub mod document_config;
pub mod filesystem_config;
pub mod registry_config;
pub mod review_config;

pub use branch_config::BranchConfig;
pub use checklist_config::{ChecklistConfig, CliOverrides};
pub use document_config::DocumentConfig;
pub use filesystem_config::FilesystemConfig;
pub use registry_config::RegistryConfig;
pub use review_config::{ReviewConfig, RouteConfig};

/// Owned copies of a default string list.
pub(crate) fn owned(defaults: &[&str]) -> Vec<String> {
    defaults.iter().map(|s| (*s).to_string()).collect()
}
