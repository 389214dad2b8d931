//! Shared fakes for rule tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use checklist_core::errors::{RemoteError, WalkError};
use checklist_core::types::{ComplianceDocument, PullRequestContext, RepositoryRef};
use checklist_rules::ports::{
    CommentLister, ContentFetcher, DirectoryWalker, FetchedContent, RemoteFile, SkippedPath,
    WalkOutcome,
};
use checklist_rules::{DocumentSlot, RuleInput};

pub const VALID_DOC: &str = "\
# ESB_ACE12_OrderService.
## INFORMACIÓN DEL SERVICIO
Servicio de ordenes.
## Procedimiento de despliegue
desplegar en los grupos de ejecución: g1, g2
## ACCESO AL SERVICIO
https://boc201.example/orders
## CANALES - APLICACIONES
## DEPENDENCIAS
## DOCUMENTACION
## SQL
";

pub fn pr(head: &str, base: &str, reviewers: &[&str]) -> PullRequestContext {
    PullRequestContext::new(
        42,
        head,
        base,
        reviewers.iter().map(|r| r.to_string()).collect(),
    )
}

pub fn input_with(pull_request: Option<PullRequestContext>, document: Option<&str>) -> RuleInput {
    RuleInput {
        pull_request,
        repository: Some(RepositoryRef::new("bocc-principal", "esb-orders")),
        root: PathBuf::from("/repo"),
        document: match document {
            Some(text) => DocumentSlot::Loaded(ComplianceDocument::new("README.md", text)),
            None => DocumentSlot::Missing {
                path: "README.md".to_string(),
            },
        },
    }
}

/// Walker returning a fixed list of directories.
pub struct FakeWalker {
    pub directories: Vec<&'static str>,
    pub skipped: usize,
    pub fail: bool,
}

impl FakeWalker {
    pub fn with(directories: Vec<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            directories,
            skipped: 0,
            fail: false,
        })
    }
}

impl DirectoryWalker for FakeWalker {
    fn walk_directories(&self, root: &Path, _excluded: &[String]) -> Result<WalkOutcome, WalkError> {
        if self.fail {
            return Err(WalkError::RootUnreadable {
                path: root.display().to_string(),
                reason: "permission denied".to_string(),
            });
        }
        Ok(WalkOutcome {
            directories: self.directories.iter().map(PathBuf::from).collect(),
            skipped: (0..self.skipped)
                .map(|i| SkippedPath {
                    path: PathBuf::from(format!("locked{i}")),
                    reason: "permission denied".to_string(),
                })
                .collect(),
        })
    }
}

/// Fetcher returning a canned result and counting calls.
pub struct FakeFetcher {
    pub result: Result<FetchedContent, String>,
    pub calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn ok(content: FetchedContent) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(content),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(reason.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentFetcher for FakeFetcher {
    async fn fetch(&self, file: &RemoteFile) -> Result<FetchedContent, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.result {
            Ok(content) => Ok(content.clone()),
            Err(reason) if reason == "404" => Err(RemoteError::NotFound {
                resource: file.display_name(),
            }),
            Err(reason) => Err(RemoteError::Network {
                reason: reason.clone(),
            }),
        }
    }
}

/// Comment lister returning canned comments or an error.
pub struct FakeLister {
    pub comments: Result<Vec<String>, String>,
}

impl FakeLister {
    pub fn with(comments: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            comments: Ok(comments.iter().map(|c| c.to_string()).collect()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            comments: Err("rate limited".to_string()),
        })
    }
}

#[async_trait]
impl CommentLister for FakeLister {
    async fn list_comments(
        &self,
        _repository: &RepositoryRef,
        _number: u64,
    ) -> Result<Vec<String>, RemoteError> {
        self.comments.clone().map_err(|reason| RemoteError::Http {
            resource: "comments".to_string(),
            status: 403,
            body: reason,
        })
    }
}
