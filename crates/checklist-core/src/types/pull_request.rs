//! Pull-request context and repository coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable view of the pull request that triggered the run.
///
/// Built once from the event payload. Fields are private so no rule can
/// alter what the others observe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestContext {
    number: u64,
    title: Option<String>,
    head_ref: String,
    base_ref: String,
    requested_reviewers: Vec<String>,
}

impl PullRequestContext {
    pub fn new(
        number: u64,
        head_ref: impl Into<String>,
        base_ref: impl Into<String>,
        requested_reviewers: Vec<String>,
    ) -> Self {
        Self {
            number,
            title: None,
            head_ref: head_ref.into(),
            base_ref: base_ref.into(),
            requested_reviewers,
        }
    }

    /// Attach the PR title. Only used for logging.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Source branch of the pull request.
    pub fn head_ref(&self) -> &str {
        &self.head_ref
    }

    /// Target branch of the pull request.
    pub fn base_ref(&self) -> &str {
        &self.base_ref
    }

    /// Requested reviewers, in the order the platform listed them.
    pub fn requested_reviewers(&self) -> &[String] {
        &self.requested_reviewers
    }

    /// Returns true if any requested reviewer appears in `allow_list`.
    /// Logins are compared ASCII-case-insensitively.
    pub fn has_reviewer_in(&self, allow_list: &[String]) -> bool {
        self.requested_reviewers.iter().any(|reviewer| {
            allow_list
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(reviewer))
        })
    }
}

/// `owner/name` coordinates of a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse the `owner/name` form used by `GITHUB_REPOSITORY`.
    pub fn parse(slug: &str) -> Option<Self> {
        let (owner, name) = slug.trim().split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some(Self::new(owner, name))
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
