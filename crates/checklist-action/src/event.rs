//! Invocation context: repository, triggering event, and runner paths.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Deserialize;

use checklist_core::errors::EventError;
use checklist_core::types::{PullRequestContext, RepositoryRef};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Events that cannot run without a payload file.
const PULL_REQUEST_EVENTS: &[&str] = &["pull_request", "pull_request_target"];

/// What the runner tells us about this invocation.
#[derive(Debug, Clone)]
pub struct ActionContext {
    pub repository: Option<RepositoryRef>,
    pub event_name: Option<String>,
    /// Present whenever the event payload carries a pull request.
    pub pull_request: Option<PullRequestContext>,
    pub workspace: PathBuf,
    pub api_url: String,
    /// `$GITHUB_OUTPUT`, when step outputs are supported.
    pub output_path: Option<PathBuf>,
}

impl ActionContext {
    pub fn from_env() -> Result<Self, EventError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the context from an arbitrary variable lookup. The event
    /// payload is read from the file named by `GITHUB_EVENT_PATH`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EventError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let event_name = lookup("GITHUB_EVENT_NAME").filter(|v| !v.is_empty());
        let requires_payload = event_name
            .as_deref()
            .is_some_and(|name| PULL_REQUEST_EVENTS.contains(&name));

        // Any event whose payload carries a `pull_request` object counts,
        // including reviews and review comments.
        let pull_request = match lookup("GITHUB_EVENT_PATH").filter(|v| !v.is_empty()) {
            Some(path) => match std::fs::read_to_string(&path) {
                Ok(payload) => parse_event_payload(&payload)?,
                Err(e) if e.kind() == ErrorKind::NotFound && !requires_payload => None,
                Err(e) => {
                    return Err(EventError::Unreadable {
                        path,
                        reason: e.to_string(),
                    })
                }
            },
            None if requires_payload => {
                return Err(EventError::MissingVariable {
                    name: "GITHUB_EVENT_PATH".to_string(),
                })
            }
            None => None,
        };

        let workspace = match lookup("GITHUB_WORKSPACE").filter(|v| !v.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir().map_err(|_| EventError::MissingVariable {
                name: "GITHUB_WORKSPACE".to_string(),
            })?,
        };

        Ok(Self {
            repository: lookup("GITHUB_REPOSITORY").and_then(|slug| RepositoryRef::parse(&slug)),
            event_name,
            pull_request,
            workspace,
            api_url: lookup("GITHUB_API_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            output_path: lookup("GITHUB_OUTPUT")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        })
    }
}

#[derive(Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestPayload>,
}

#[derive(Deserialize)]
struct PullRequestPayload {
    number: u64,
    #[serde(default)]
    title: Option<String>,
    head: BranchPayload,
    base: BranchPayload,
    #[serde(default)]
    requested_reviewers: Vec<UserPayload>,
}

#[derive(Deserialize)]
struct BranchPayload {
    #[serde(rename = "ref")]
    git_ref: String,
}

#[derive(Deserialize)]
struct UserPayload {
    login: String,
}

/// Extract the pull-request context from an event payload.
/// Returns `Ok(None)` for payloads without a `pull_request` object.
pub fn parse_event_payload(json: &str) -> Result<Option<PullRequestContext>, EventError> {
    let payload: EventPayload = serde_json::from_str(json).map_err(|e| EventError::Malformed {
        reason: e.to_string(),
    })?;

    Ok(payload.pull_request.map(|pr| {
        let reviewers = pr.requested_reviewers.into_iter().map(|u| u.login).collect();
        let context = PullRequestContext::new(pr.number, pr.head.git_ref, pr.base.git_ref, reviewers);
        match pr.title {
            Some(title) => context.with_title(title),
            None => context,
        }
    }))
}
