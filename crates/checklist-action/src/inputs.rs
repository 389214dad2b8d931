//! Action inputs as exported by the Actions runner.

use std::path::PathBuf;

use checklist_core::config::CliOverrides;

pub const DEFAULT_REPORT_FORMAT: &str = "console";

/// Inputs declared by the action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionInputs {
    /// Token for pull-request comments. Falls back to `GITHUB_TOKEN`.
    pub github_token: Option<String>,
    /// Token for the central configuration repository. Falls back to
    /// `ESB_ACE12_ORG_REPO_TOKEN`.
    pub config_repo_token: Option<String>,
    pub skip_readme_validation: Option<bool>,
    pub config_file: Option<PathBuf>,
    /// Job-log report format. Annotations are always added after it.
    pub report_format: Option<String>,
}

impl ActionInputs {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the inputs from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = |name: &str| non_blank(lookup(&input_var(name)));
        Self {
            github_token: input("github-token").or_else(|| non_blank(lookup("GITHUB_TOKEN"))),
            config_repo_token: input("config-repo-token")
                .or_else(|| non_blank(lookup("ESB_ACE12_ORG_REPO_TOKEN"))),
            skip_readme_validation: input("skip-readme-validation").and_then(|v| parse_bool(&v)),
            config_file: input("config-file").map(PathBuf::from),
            report_format: input("report-format").map(|v| v.to_lowercase()),
        }
    }

    pub fn report_format(&self) -> &str {
        self.report_format.as_deref().unwrap_or(DEFAULT_REPORT_FORMAT)
    }

    pub fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            skip_document_validation: self.skip_readme_validation,
            document_path: None,
        }
    }
}

/// Environment variable the runner uses for an input: `INPUT_` followed by
/// the name uppercased with spaces turned into underscores.
pub fn input_var(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
