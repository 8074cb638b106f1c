//! Tests for the file evaluator
//!
//! Covers the verdict for each fixture and the read/parse failure paths.

use std::fs;

use pushperm::core::models::{PermissionScope, VerdictKind};
use pushperm::core::services::{PushClassifier, evaluate, evaluate_content};

use crate::common::{self, TestRepo};

const MISSING: &str = "Has git push operations but missing 'contents: write' permission";

#[test]
fn push_without_permissions_is_invalid() {
    let verdict = evaluate_content(common::PUSH_NO_PERMISSIONS, &PushClassifier::new());
    assert!(!verdict.is_valid());
    assert_eq!(verdict.kind, VerdictKind::MissingPermission);
    assert_eq!(verdict.message, MISSING);
}

#[test]
fn push_with_root_write_is_valid() {
    let verdict = evaluate_content(common::PUSH_ROOT_WRITE, &PushClassifier::new());
    assert!(verdict.is_valid());
    assert_eq!(verdict.granted_by, Some(PermissionScope::Workflow));
}

#[test]
fn push_with_write_all_is_valid() {
    let verdict = evaluate_content(common::PUSH_WRITE_ALL, &PushClassifier::new());
    assert_eq!(verdict.kind, VerdictKind::Permitted);
}

#[test]
fn job_level_grant_is_enough() {
    let verdict = evaluate_content(common::PUSH_OTHER_JOB_WRITE, &PushClassifier::new());
    assert!(verdict.is_valid());
    assert_eq!(verdict.granted_by, Some(PermissionScope::Job("tag".to_string())));
}

#[test]
fn auto_commit_without_permissions_is_invalid() {
    let verdict = evaluate_content(common::AUTO_COMMIT_NO_PERMISSIONS, &PushClassifier::new());
    assert_eq!(verdict.kind, VerdictKind::MissingPermission);
}

#[test]
fn no_push_never_parses() {
    let verdict = evaluate_content(common::NO_PUSH_BROKEN_YAML, &PushClassifier::new());
    assert!(verdict.is_valid());
    assert_eq!(verdict.kind, VerdictKind::NoPush);
    assert_eq!(verdict.message, "No git push operations found");
}

#[test]
fn parse_failure_is_distinct_from_missing_permission() {
    let verdict = evaluate_content(common::PUSH_BROKEN_YAML, &PushClassifier::new());
    assert!(!verdict.is_valid());
    assert_eq!(verdict.kind, VerdictKind::ParseError);
    assert!(verdict.message.starts_with("Failed to parse YAML:"));
    assert_ne!(verdict.message, MISSING);
}

#[test]
fn unreadable_file_is_invalid() {
    let repo = TestRepo::new();
    let verdict = evaluate(&repo.workflows_dir().join("gone.yml"), &PushClassifier::new());
    assert_eq!(verdict.kind, VerdictKind::ReadError);
    assert!(verdict.message.starts_with("Error reading file:"));
}

#[test]
fn non_utf8_file_is_read_error() {
    let repo = TestRepo::new();
    let path = repo.workflows_dir().join("binary.yml");
    fs::write(&path, [0x67, 0x69, 0x74, 0xff, 0xfe]).unwrap();

    let verdict = evaluate(&path, &PushClassifier::new());
    assert_eq!(verdict.kind, VerdictKind::ReadError);
}

#[test]
fn evaluation_is_idempotent() {
    let repo = TestRepo::new();
    let path = repo.add_workflow("ci.yml", common::PUSH_NO_PERMISSIONS);
    let classifier = PushClassifier::new();

    assert_eq!(evaluate(&path, &classifier), evaluate(&path, &classifier));
}

#[test]
fn empty_classifier_passes_everything() {
    let verdict = evaluate_content(common::PUSH_BROKEN_YAML, &PushClassifier::empty());
    assert_eq!(verdict.kind, VerdictKind::NoPush);
}

#[test]
fn byte_order_mark_is_not_a_parse_error() {
    let workflow = "\u{feff}permissions:\n  contents: write\njobs:\n  a:\n    steps:\n      - run: git push\n";
    let verdict = evaluate_content(workflow, &PushClassifier::new());
    assert_eq!(verdict.kind, VerdictKind::Permitted);
    assert_eq!(verdict.granted_by, Some(PermissionScope::Workflow));
}

#[test]
fn byte_order_mark_file_on_disk() {
    let repo = TestRepo::new();
    let path = repo.add_workflow("bom.yml", &format!("\u{feff}{}", common::PUSH_NO_PERMISSIONS));

    let verdict = evaluate(&path, &PushClassifier::new());
    assert_eq!(verdict.kind, VerdictKind::MissingPermission);
}
