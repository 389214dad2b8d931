//! Remote platform ports: repository content and pull-request comments.

use async_trait::async_trait;
use base64::Engine;

use checklist_core::errors::RemoteError;
use checklist_core::types::RepositoryRef;

/// A file in a hosted repository at a given ref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub owner: String,
    pub repo: String,
    pub path: String,
    pub git_ref: String,
}

impl RemoteFile {
    /// `owner/repo/path@ref`, used in messages.
    pub fn display_name(&self) -> String {
        format!("{}/{}/{}@{}", self.owner, self.repo, self.path, self.git_ref)
    }
}

/// How a fetched payload is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Base64,
    Raw,
}

/// Payload returned by a [`ContentFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedContent {
    pub encoding: ContentEncoding,
    pub body: String,
}

impl FetchedContent {
    pub fn raw(body: impl Into<String>) -> Self {
        Self {
            encoding: ContentEncoding::Raw,
            body: body.into(),
        }
    }

    pub fn base64(body: impl Into<String>) -> Self {
        Self {
            encoding: ContentEncoding::Base64,
            body: body.into(),
        }
    }

    /// Decode the payload into UTF-8 text.
    ///
    /// Base64 bodies may be wrapped across lines, as the contents API
    /// returns them; all whitespace is dropped before decoding.
    pub fn decode(&self) -> Result<String, RemoteError> {
        match self.encoding {
            ContentEncoding::Raw => Ok(self.body.clone()),
            ContentEncoding::Base64 => {
                let compact: String = self.body.chars().filter(|c| !c.is_whitespace()).collect();
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(compact.as_bytes())
                    .map_err(|e| RemoteError::Decode {
                        reason: format!("invalid base64: {e}"),
                    })?;
                String::from_utf8(bytes).map_err(|e| RemoteError::Decode {
                    reason: format!("content is not UTF-8: {e}"),
                })
            }
        }
    }
}

/// Fetches file content from a hosted repository.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, file: &RemoteFile) -> Result<FetchedContent, RemoteError>;
}

/// Lists the comment bodies of an issue or pull request, oldest first.
#[async_trait]
pub trait CommentLister: Send + Sync {
    async fn list_comments(
        &self,
        repository: &RepositoryRef,
        number: u64,
    ) -> Result<Vec<String>, RemoteError>;
}
