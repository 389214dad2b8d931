//! Action flow: configure, run the rules, publish the report.

use std::sync::Arc;

use tracing::{info, warn};

use checklist_core::config::ChecklistConfig;
use checklist_core::constants::VERSION;
use checklist_core::errors::ChecklistErrorCode;
use checklist_core::types::ComplianceReport;
use checklist_rules::adapters::{LocalDirectoryWalker, LocalDocumentStore};
use checklist_rules::ports::Collaborators;
use checklist_rules::reporters::github::escape_data;
use checklist_rules::reporters::{available_formats, create_reporter};
use checklist_rules::{ComplianceRunner, RuleInput};

use crate::error::ActionError;
use crate::event::ActionContext;
use crate::github::GitHubClient;
use crate::inputs::ActionInputs;
use crate::outputs::write_outputs;

/// Always printed after the selected format so failures are annotated.
const ANNOTATION_FORMAT: &str = "github";

/// Load configuration, wire collaborators, and run every rule.
pub async fn run(
    inputs: &ActionInputs,
    context: &ActionContext,
) -> Result<ComplianceReport, ActionError> {
    // Reject a bad format before any rule runs.
    create_reporter(inputs.report_format()).ok_or_else(|| unknown_format(inputs.report_format()))?;
    let config = ChecklistConfig::load(inputs.config_file.as_deref(), Some(&inputs.cli_overrides()))?;

    info!(
        repository = ?context.repository.as_ref().map(ToString::to_string),
        event = ?context.event_name,
        workspace = %context.workspace.display(),
        version = VERSION,
        "starting repository checklist"
    );
    if let Some(pr) = &context.pull_request {
        info!(
            number = pr.number(),
            title = pr.title().unwrap_or_default(),
            head = pr.head_ref(),
            base = pr.base_ref(),
            "pull request"
        );
    }

    let collaborators = collaborators(inputs, context)?;
    let capabilities = collaborators.capabilities();
    info!(
        remote_config = capabilities.remote_config,
        remote_comments = capabilities.remote_comments,
        "remote capabilities"
    );
    let store = LocalDocumentStore::new(&context.workspace);
    let input = RuleInput::load(
        context.pull_request.clone(),
        context.repository.clone(),
        &context.workspace,
        &store,
        config.document.effective_path(),
    );

    let runner = ComplianceRunner::from_config(&config, collaborators);
    Ok(runner.run(&input).await)
}

/// Remote collaborators exist only for the tokens that were provided.
fn collaborators(
    inputs: &ActionInputs,
    context: &ActionContext,
) -> Result<Collaborators, ActionError> {
    let mut collaborators = Collaborators::new(Arc::new(LocalDirectoryWalker::new()));

    match &inputs.config_repo_token {
        Some(token) => {
            let client = GitHubClient::new(&context.api_url, token)?;
            collaborators = collaborators.with_content_fetcher(Arc::new(client));
        }
        None => warn!("config-repo-token not provided; execution groups will not be checked"),
    }
    match &inputs.github_token {
        Some(token) => {
            let client = GitHubClient::new(&context.api_url, token)?;
            collaborators = collaborators.with_comment_lister(Arc::new(client));
        }
        None => warn!("github-token not provided; exception comments will not be read"),
    }

    Ok(collaborators)
}

/// Render `report` in `format` followed by the annotation commands.
pub fn render(report: &ComplianceReport, format: &str) -> Result<String, ActionError> {
    let mut formats = vec![format];
    if format != ANNOTATION_FORMAT {
        formats.push(ANNOTATION_FORMAT);
    }

    let mut rendered = String::new();
    for format in formats {
        let reporter = create_reporter(format).ok_or_else(|| unknown_format(format))?;
        let text = reporter.generate(report).map_err(|reason| ActionError::Report {
            format: format.to_string(),
            reason,
        })?;
        rendered.push_str(&text);
        if !text.is_empty() && !text.ends_with('\n') {
            rendered.push('\n');
        }
    }
    if !report.passed() {
        rendered.push_str("::error::One or more validations failed\n");
    }
    Ok(rendered)
}

/// The single-line `::error::` command for a fatal error.
pub fn fatal_annotation(error: &ActionError) -> String {
    format!("::error::{}\n", escape_data(&error.coded_string()))
}

fn unknown_format(format: &str) -> ActionError {
    ActionError::Report {
        format: format.to_string(),
        reason: format!("unknown format; expected one of {}", available_formats().join(", ")),
    }
}

/// Print the report and write the `validation-passed` and `results` outputs.
pub fn publish(
    report: &ComplianceReport,
    context: &ActionContext,
    format: &str,
) -> Result<(), ActionError> {
    print!("{}", render(report, format)?);

    if let Some(path) = &context.output_path {
        let outputs = [
            ("validation-passed", report.passed().to_string()),
            ("results", report.legacy_results().to_string()),
        ];
        write_outputs(path, &outputs).map_err(|source| ActionError::Output {
            path: path.display().to_string(),
            source,
        })?;
    }
    Ok(())
}
