//! Tests for the checklist configuration system.

use std::sync::Mutex;

use checklist_core::config::{ChecklistConfig, CliOverrides, RouteConfig};
use checklist_core::constants;
use checklist_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_checklist_env_vars() {
    for key in [
        "CHECKLIST_CONFIG",
        "CHECKLIST_DOCUMENT_PATH",
        "CHECKLIST_SKIP_DOCUMENT_VALIDATION",
        "CHECKLIST_REGISTRY_REF",
        "CHECKLIST_REVIEW_STRICT_EXCEPTION",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_defaults_match_historical_literals() {
    let config = ChecklistConfig::default();

    assert_eq!(
        config.branch.effective_prefixes(),
        vec!["feature", "bugfix", "hotfix", "release"]
    );
    assert_eq!(config.document.effective_path(), "README.md");
    assert_eq!(config.document.effective_title_prefix(), "# ESB_");
    assert_eq!(config.document.effective_required_sections().len(), 8);
    assert_eq!(config.document.effective_deprecated_host(), "boc200");
    assert!(!config.document.effective_skip_validation());
    assert_eq!(config.filesystem.effective_forbidden(), vec!["bd"]);
    assert!(config
        .filesystem
        .effective_excluded()
        .contains(&".git".to_string()));
    assert_eq!(config.registry.effective_owner(), "bocc-principal");
    assert_eq!(config.registry.effective_repo(), "ESB_ACE12_General_Configs");
    assert_eq!(config.registry.effective_ref(), "main");
    assert_eq!(config.registry.effective_key_prefix(), "ESB_ACE12");
    assert_eq!(
        config.review.effective_reviewers(),
        vec!["DRamirezM", "cdgomez", "acardenasm", "CAARIZA"]
    );
    assert_eq!(
        config.review.effective_gated_routes(),
        vec![
            RouteConfig::new("develop", "quality"),
            RouteConfig::new("quality", "main")
        ]
    );
    assert_eq!(
        config.review.effective_exception_marker(),
        constants::DEFAULT_EXCEPTION_MARKER
    );
    assert!(!config.review.effective_strict_exception());
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_checklist_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("checklist.toml");
    std::fs::write(
        &file,
        r#"
[document]
path = "docs/README.md"
skip_validation = false

[registry]
git_ref = "release"

[review]
authorized_reviewers = ["alice"]
strict_exception = false
"#,
    )
    .unwrap();

    // Env overrides the file
    std::env::set_var("CHECKLIST_REGISTRY_REF", "hotfix-configs");
    std::env::set_var("CHECKLIST_REVIEW_STRICT_EXCEPTION", "true");

    // Action inputs override both
    let cli = CliOverrides {
        skip_document_validation: Some(true),
        ..Default::default()
    };

    let config = ChecklistConfig::load(Some(&file), Some(&cli)).unwrap();
    clear_checklist_env_vars();

    assert_eq!(config.document.effective_path(), "docs/README.md");
    assert!(config.document.effective_skip_validation());
    assert_eq!(config.registry.effective_ref(), "hotfix-configs");
    assert!(config.review.effective_strict_exception());
    assert_eq!(config.review.effective_reviewers(), vec!["alice"]);
    // Untouched sections keep their defaults
    assert_eq!(config.registry.effective_owner(), "bocc-principal");
}

#[test]
fn test_config_file_from_env_var() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_checklist_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("custom.toml");
    std::fs::write(&file, "[filesystem]\nforbidden_dir_names = [\"db\", \"bd\"]\n").unwrap();
    std::env::set_var("CHECKLIST_CONFIG", &file);

    let config = ChecklistConfig::load(None, None).unwrap();
    clear_checklist_env_vars();

    assert_eq!(config.filesystem.effective_forbidden(), vec!["db", "bd"]);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_checklist_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = ChecklistConfig::load(Some(&missing), None).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_no_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_checklist_env_vars();

    let config = ChecklistConfig::load(None, None).unwrap();
    assert_eq!(config.document.effective_path(), "README.md");
}

#[test]
fn test_invalid_toml_reports_parse_error() {
    let err = ChecklistConfig::from_toml("[review\nstrict_exception = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_blank_entries_rejected() {
    let err = ChecklistConfig::from_toml("[branch]\nallowed_prefixes = [\"feature\", \" \"]\n")
        .unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "branch.allowed_prefixes")
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = ChecklistConfig::from_toml("[document]\ntitle_prefix = \"\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_prefix_with_slash_rejected() {
    let err =
        ChecklistConfig::from_toml("[branch]\nallowed_prefixes = [\"feature/x\"]\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_gated_routes_from_toml() {
    let config = ChecklistConfig::from_toml(
        r#"
[[review.gated_routes]]
source = "develop"
target = "staging"
"#,
    )
    .unwrap();
    let routes = config.review.effective_gated_routes();
    assert_eq!(routes.len(), 1);
    assert!(routes[0].matches("develop", "staging"));
    assert!(!routes[0].matches("develop", "quality"));
}

#[test]
fn test_toml_round_trip_keeps_overrides() {
    let config = ChecklistConfig::from_toml("[registry]\nowner = \"acme\"\n").unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = ChecklistConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.registry.effective_owner(), "acme");
}
