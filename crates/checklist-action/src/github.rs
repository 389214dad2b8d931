//! GitHub REST client implementing the remote ports.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use checklist_core::constants::VERSION;
use checklist_core::errors::RemoteError;
use checklist_core::types::RepositoryRef;
use checklist_rules::ports::{CommentLister, ContentFetcher, FetchedContent, RemoteFile};

const API_VERSION: &str = "2022-11-28";
const MEDIA_TYPE: &str = "application/vnd.github+json";
const PER_PAGE: usize = 100;
const MAX_COMMENT_PAGES: u32 = 50;
const MAX_ERROR_BODY: usize = 512;

/// Authenticated client for one token.
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl GitHubClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("esb-ace12-checklist/{VERSION}"))
            .build()
            .map_err(|e| RemoteError::Network {
                reason: format!("cannot build HTTP client: {e}"),
            })?;
        Ok(Self {
            http,
            api_url: api_url.into(),
            token: token.into(),
        })
    }

    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        resource: &str,
    ) -> Result<reqwest::Response, RemoteError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .header(ACCEPT, MEDIA_TYPE)
            .header("X-GitHub-Api-Version", API_VERSION)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| RemoteError::Network {
                reason: format!("request for {resource} failed: {e}"),
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(RemoteError::NotFound {
                resource: resource.to_string(),
            });
        }
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(RemoteError::Http {
                resource: resource.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[derive(Deserialize)]
struct ContentsResponse {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
}

#[derive(Deserialize)]
struct CommentResponse {
    #[serde(default)]
    body: Option<String>,
}

/// `GET /repos/{owner}/{repo}/contents/{path}`; the ref goes in the query.
pub fn contents_url(api_url: &str, file: &RemoteFile) -> String {
    format!(
        "{}/repos/{}/{}/contents/{}",
        api_url.trim_end_matches('/'),
        file.owner,
        file.repo,
        file.path.trim_start_matches('/')
    )
}

/// `GET /repos/{owner}/{repo}/issues/{number}/comments`.
pub fn comments_url(api_url: &str, repository: &RepositoryRef, number: u64) -> String {
    format!(
        "{}/repos/{}/{}/issues/{}/comments",
        api_url.trim_end_matches('/'),
        repository.owner,
        repository.name,
        number
    )
}

#[async_trait]
impl ContentFetcher for GitHubClient {
    async fn fetch(&self, file: &RemoteFile) -> Result<FetchedContent, RemoteError> {
        let resource = file.display_name();
        let url = contents_url(&self.api_url, file);
        debug!(%resource, "fetching repository content");

        let response = self
            .get(&url, &[("ref", file.git_ref.clone())], &resource)
            .await?;
        let contents: ContentsResponse = response.json().await.map_err(|e| RemoteError::Decode {
            reason: format!("unexpected contents response for {resource}: {e}"),
        })?;

        match (contents.encoding.as_deref(), contents.content) {
            (Some("base64"), Some(body)) => Ok(FetchedContent::base64(body)),
            (_, Some(body)) if !body.is_empty() => Ok(FetchedContent::raw(body)),
            _ => Err(RemoteError::Decode {
                reason: format!("{resource} has no inline content"),
            }),
        }
    }
}

#[async_trait]
impl CommentLister for GitHubClient {
    async fn list_comments(
        &self,
        repository: &RepositoryRef,
        number: u64,
    ) -> Result<Vec<String>, RemoteError> {
        let url = comments_url(&self.api_url, repository, number);
        let resource = format!("{repository}#{number} comments");
        let mut bodies = Vec::new();

        for page in 1..=MAX_COMMENT_PAGES {
            let query = [("per_page", PER_PAGE.to_string()), ("page", page.to_string())];
            let response = self.get(&url, &query, &resource).await?;
            let comments: Vec<CommentResponse> =
                response.json().await.map_err(|e| RemoteError::Decode {
                    reason: format!("unexpected comments response for {resource}: {e}"),
                })?;

            let count = comments.len();
            bodies.extend(comments.into_iter().filter_map(|c| c.body));
            if count < PER_PAGE {
                break;
            }
        }

        debug!(%resource, count = bodies.len(), "listed comments");
        Ok(bodies)
    }
}
