//! Per-rule behaviour with fake collaborators.

mod common;

use checklist_core::config::{
    BranchConfig, DocumentConfig, FilesystemConfig, RegistryConfig, ReviewConfig,
};
use checklist_core::errors::RuleError;
use checklist_core::types::{RuleId, RuleStatus};
use checklist_rules::ports::FetchedContent;
use checklist_rules::rules::{
    BranchNameRule, DocumentTemplateRule, FilesystemPolicyRule, GroupReconciliationRule,
    ReviewerPolicyRule,
};
use checklist_rules::{ComplianceRule, DocumentSlot};
use common::*;

// ---- Branch name ----

#[tokio::test]
async fn branch_name_examples() {
    let rule = BranchNameRule::new(&BranchConfig::default());

    let ok = rule
        .evaluate(&input_with(Some(pr("feature/ABC-123", "develop", &[])), None))
        .await
        .unwrap();
    assert_eq!(ok.status, RuleStatus::Pass);

    let ok = rule
        .evaluate(&input_with(Some(pr("release/2.0.1", "main", &[])), None))
        .await
        .unwrap();
    assert_eq!(ok.status, RuleStatus::Pass);

    let bad = rule
        .evaluate(&input_with(Some(pr("wip-stuff", "develop", &[])), None))
        .await
        .unwrap();
    assert_eq!(bad.status, RuleStatus::Fail);
    assert!(bad.message.contains("wip-stuff"));
    assert!(bad.message.contains("hotfix/"));
}

#[tokio::test]
async fn branch_name_skipped_without_pr() {
    let rule = BranchNameRule::new(&BranchConfig::default());
    let outcome = rule.evaluate(&input_with(None, None)).await.unwrap();
    assert_eq!(outcome.status, RuleStatus::Skipped);
}

#[tokio::test]
async fn branch_name_uses_configured_prefixes() {
    let config = BranchConfig {
        allowed_prefixes: vec!["chore".to_string()],
    };
    let rule = BranchNameRule::new(&config);
    let outcome = rule
        .evaluate(&input_with(Some(pr("feature/x", "develop", &[])), None))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Fail);
}

// ---- Document template ----

#[tokio::test]
async fn valid_document_passes() {
    let rule = DocumentTemplateRule::new(&DocumentConfig::default());
    let outcome = rule.evaluate(&input_with(None, Some(VALID_DOC))).await.unwrap();
    assert_eq!(outcome.status, RuleStatus::Pass, "{:?}", outcome.violations);
}

#[tokio::test]
async fn removing_one_section_reports_exactly_that_section() {
    let rule = DocumentTemplateRule::new(&DocumentConfig::default());
    let doc = VALID_DOC.replace("## DEPENDENCIAS\n", "");
    let outcome = rule.evaluate(&input_with(None, Some(&doc))).await.unwrap();
    assert_eq!(outcome.status, RuleStatus::Fail);
    assert_eq!(outcome.violations.len(), 1);
    assert_eq!(outcome.violations[0].code, "missing-section");
    assert!(outcome.violations[0].message.contains("## DEPENDENCIAS"));
}

#[tokio::test]
async fn section_must_be_line_anchored() {
    let rule = DocumentTemplateRule::new(&DocumentConfig::default());
    let doc = VALID_DOC.replace("## SQL\n", "see ## SQL below\n");
    let outcome = rule.evaluate(&input_with(None, Some(&doc))).await.unwrap();
    assert_eq!(outcome.status, RuleStatus::Fail);
}

#[tokio::test]
async fn placeholder_titles_fail() {
    let rule = DocumentTemplateRule::new(&DocumentConfig::default());
    for title in ["# ESB_", "# ESB_-", "# ESB_--."] {
        let doc = VALID_DOC.replace("# ESB_ACE12_OrderService.", title);
        let outcome = rule.evaluate(&input_with(None, Some(&doc))).await.unwrap();
        assert_eq!(outcome.status, RuleStatus::Fail, "{title}");
        assert!(outcome.violations.iter().any(|v| v.code == "placeholder-title"));
    }

    let doc = VALID_DOC.replace("# ESB_ACE12_OrderService.", "# ESB_OrderService");
    let outcome = rule.evaluate(&input_with(None, Some(&doc))).await.unwrap();
    assert_eq!(outcome.status, RuleStatus::Pass);
}

#[tokio::test]
async fn deprecated_host_names_lines_and_accumulates() {
    let rule = DocumentTemplateRule::new(&DocumentConfig::default());
    let doc = VALID_DOC
        .replace("boc201", "boc200")
        .replace("## SQL\n", "");
    let outcome = rule.evaluate(&input_with(None, Some(&doc))).await.unwrap();
    assert_eq!(outcome.status, RuleStatus::Fail);
    assert_eq!(outcome.violations.len(), 2);
    let host = outcome
        .violations
        .iter()
        .find(|v| v.code == "deprecated-host")
        .unwrap();
    assert!(host.message.contains("line(s) 7"));
    assert!(host.message.contains("boc201"));
}

#[tokio::test]
async fn missing_document_fails_with_dedicated_violation() {
    let rule = DocumentTemplateRule::new(&DocumentConfig::default());
    let outcome = rule.evaluate(&input_with(None, None)).await.unwrap();
    assert_eq!(outcome.status, RuleStatus::Fail);
    assert_eq!(outcome.violations[0].code, "document-missing");
}

#[tokio::test]
async fn unreadable_document_is_an_error() {
    let rule = DocumentTemplateRule::new(&DocumentConfig::default());
    let mut input = input_with(None, None);
    input.document = DocumentSlot::Unreadable {
        path: "README.md".to_string(),
        reason: "is a directory".to_string(),
    };
    let result = rule.evaluate(&input).await;
    assert!(matches!(result, Err(RuleError::Document(_))));
}

// ---- Filesystem policy ----

#[tokio::test]
async fn only_exact_basenames_are_forbidden() {
    let walker = FakeWalker::with(vec!["a", "a/BD", "a/bd2", "bdx", "z/bd"]);
    let rule = FilesystemPolicyRule::new(&FilesystemConfig::default(), walker);
    let outcome = rule.evaluate(&input_with(None, None)).await.unwrap();
    assert_eq!(outcome.status, RuleStatus::Fail);
    let paths: Vec<&str> = outcome
        .violations
        .iter()
        .map(|v| v.message.trim_start_matches("Forbidden directory: "))
        .collect();
    assert_eq!(paths, vec!["a/BD", "z/bd"]);
}

#[tokio::test]
async fn clean_tree_passes_with_skip_note() {
    let walker = std::sync::Arc::new(FakeWalker {
        directories: vec!["src", "docs"],
        skipped: 2,
        fail: false,
    });
    let rule = FilesystemPolicyRule::new(&FilesystemConfig::default(), walker);
    let outcome = rule.evaluate(&input_with(None, None)).await.unwrap();
    assert_eq!(outcome.status, RuleStatus::Pass);
    assert_eq!(outcome.notes.len(), 1);
    assert!(outcome.notes[0].contains('2'));
}

#[tokio::test]
async fn unreadable_root_is_an_error() {
    let walker = std::sync::Arc::new(FakeWalker {
        directories: vec![],
        skipped: 0,
        fail: true,
    });
    let rule = FilesystemPolicyRule::new(&FilesystemConfig::default(), walker);
    let result = rule.evaluate(&input_with(None, None)).await;
    assert!(matches!(result, Err(RuleError::Walk(_))));
}

// ---- Group reconciliation ----

fn groups_rule(
    fetcher: Option<std::sync::Arc<FakeFetcher>>,
) -> GroupReconciliationRule {
    GroupReconciliationRule::new(
        &RegistryConfig::default(),
        "# ESB_",
        fetcher.map(|f| f as std::sync::Arc<dyn checklist_rules::ports::ContentFetcher>),
    )
}

#[tokio::test]
async fn groups_skipped_without_fetcher_or_document() {
    let outcome = groups_rule(None)
        .evaluate(&input_with(None, Some(VALID_DOC)))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Skipped);

    let fetcher = FakeFetcher::ok(FetchedContent::raw(""));
    let outcome = groups_rule(Some(fetcher.clone()))
        .evaluate(&input_with(None, None))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Skipped);
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn matching_groups_pass() {
    let listing = "ESB_ACE12_OrderService.Transactional=g1\nesb_ace12_orderservice.notification=G2\n";
    let outcome = groups_rule(Some(FakeFetcher::ok(FetchedContent::raw(listing))))
        .evaluate(&input_with(None, Some(VALID_DOC)))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Pass, "{}", outcome.message);
}

#[tokio::test]
async fn base64_payload_is_decoded() {
    // "ESB_ACE12_OrderService.Transactional=g1,g2\n"
    let body = "RVNCX0FDRTEyX09yZGVyU2VydmljZS5UcmFuc2FjdGlv\nbmFsPWcxLGcyCg==\n";
    let outcome = groups_rule(Some(FakeFetcher::ok(FetchedContent::base64(body))))
        .evaluate(&input_with(None, Some(VALID_DOC)))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Pass, "{}", outcome.message);
}

#[tokio::test]
async fn group_differences_reported_in_both_directions() {
    let doc = VALID_DOC.replace("g1, g2", "g1 g3");
    let listing = "ESB_ACE12_OrderService.Transactional=g1,g2\n";
    let outcome = groups_rule(Some(FakeFetcher::ok(FetchedContent::raw(listing))))
        .evaluate(&input_with(None, Some(&doc)))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Fail);
    let codes: Vec<&str> = outcome.violations.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(codes, vec!["missing-in-configuration", "missing-in-document"]);
    assert!(outcome.violations[0].message.ends_with("g3"));
    assert!(outcome.violations[1].message.ends_with("g2"));
}

#[tokio::test]
async fn missing_registry_entry_names_both_keys() {
    let outcome = groups_rule(Some(FakeFetcher::ok(FetchedContent::raw("OTHER=x\n"))))
        .evaluate(&input_with(None, Some(VALID_DOC)))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Fail);
    assert!(outcome.message.contains("ESB_ACE12_OrderService.Transactional"));
    assert!(outcome.message.contains("ESB_ACE12_OrderService.Notification"));
}

#[tokio::test]
async fn fetch_and_decode_errors_fail() {
    let outcome = groups_rule(Some(FakeFetcher::failing("404")))
        .evaluate(&input_with(None, Some(VALID_DOC)))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Fail);
    assert_eq!(outcome.violations[0].code, "config-download-failed");

    let outcome = groups_rule(Some(FakeFetcher::ok(FetchedContent::base64("@@not base64@@"))))
        .evaluate(&input_with(None, Some(VALID_DOC)))
        .await
        .unwrap();
    assert_eq!(outcome.violations[0].code, "config-download-failed");
}

#[tokio::test]
async fn missing_phrase_warns_and_missing_title_fails() {
    let doc = VALID_DOC.replace("desplegar en los grupos de ejecución: g1, g2", "");
    let outcome = groups_rule(Some(FakeFetcher::ok(FetchedContent::raw(""))))
        .evaluate(&input_with(None, Some(&doc)))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Warning);

    let doc = VALID_DOC.replace("# ESB_ACE12_OrderService.", "# ESB_ACE12_.");
    let outcome = groups_rule(Some(FakeFetcher::ok(FetchedContent::raw(""))))
        .evaluate(&input_with(None, Some(&doc)))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Fail);
    assert_eq!(outcome.violations[0].code, "unknown-service");
}

// ---- Reviewer policy ----

fn reviewer_rule(
    strict: bool,
    lister: Option<std::sync::Arc<FakeLister>>,
) -> ReviewerPolicyRule {
    let config = ReviewConfig {
        strict_exception: Some(strict),
        ..ReviewConfig::default()
    };
    ReviewerPolicyRule::new(
        &config,
        lister.map(|l| l as std::sync::Arc<dyn checklist_rules::ports::CommentLister>),
    )
}

#[tokio::test]
async fn gated_routes_require_authorized_reviewer() {
    let rule = reviewer_rule(false, None);

    let outcome = rule
        .evaluate(&input_with(Some(pr("develop", "quality", &["cdgomez"])), None))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Pass);

    let outcome = rule
        .evaluate(&input_with(Some(pr("quality", "main", &["someone"])), None))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Fail);
    assert!(outcome.message.contains("DRamirezM"));
}

#[tokio::test]
async fn reviewer_match_ignores_case() {
    let rule = reviewer_rule(false, None);
    let outcome = rule
        .evaluate(&input_with(Some(pr("develop", "quality", &["caariza"])), None))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Pass);
}

#[tokio::test]
async fn exception_marker_applies() {
    let rule = reviewer_rule(true, Some(FakeLister::with(&["lgtm", "@bot aprobar excepción por incidente"])));
    let outcome = rule
        .evaluate(&input_with(Some(pr("feature/x", "develop", &[])), None))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Pass);
    assert_eq!(outcome.notes, vec!["Emergency exception applied".to_string()]);
}

#[tokio::test]
async fn exception_absent_depends_on_strictness() {
    let lenient = reviewer_rule(false, Some(FakeLister::with(&["lgtm"])));
    let outcome = lenient
        .evaluate(&input_with(Some(pr("feature/x", "develop", &[])), None))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Pass);

    let strict = reviewer_rule(true, Some(FakeLister::with(&["lgtm"])));
    let outcome = strict
        .evaluate(&input_with(Some(pr("feature/x", "develop", &[])), None))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Fail);
    assert_eq!(outcome.violations[0].code, "missing-exception");
}

#[tokio::test]
async fn comment_access_degrades_without_failing() {
    let outcome = reviewer_rule(false, None)
        .evaluate(&input_with(Some(pr("feature/x", "develop", &[])), None))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Pass);
    assert_eq!(outcome.notes.len(), 1);

    let outcome = reviewer_rule(true, None)
        .evaluate(&input_with(Some(pr("feature/x", "develop", &[])), None))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Warning);

    let outcome = reviewer_rule(true, Some(FakeLister::failing()))
        .evaluate(&input_with(Some(pr("feature/x", "develop", &[])), None))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Warning);
}

#[tokio::test]
async fn other_routes_and_non_pr_events_skip() {
    let rule = reviewer_rule(false, None);
    let outcome = rule
        .evaluate(&input_with(Some(pr("main", "quality", &[])), None))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Skipped);

    // Same target on a gated route with nobody requested.
    let outcome = rule
        .evaluate(&input_with(Some(pr("develop", "quality", &[])), None))
        .await
        .unwrap();
    assert_eq!(outcome.status, RuleStatus::Fail);

    let outcome = rule.evaluate(&input_with(None, None)).await.unwrap();
    assert_eq!(outcome.status, RuleStatus::Skipped);
    assert_eq!(rule.id(), RuleId::ReviewerPolicy);
}
