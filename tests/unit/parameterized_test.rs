//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use pushperm::core::models::VerdictKind;
use pushperm::core::services::{PushClassifier, evaluate_content};
use test_case::test_case;

// =============================================================================
// Classifier Tests
// =============================================================================

#[test_case("git push", true ; "bare git push")]
#[test_case("GIT   PUSH --force", true ; "uppercase with spaces")]
#[test_case("run: git commit -am x && git push", true ; "commit chained to push")]
#[test_case("uses: stefanzweifel/git-auto-commit-action@v5", true ; "auto commit action")]
#[test_case("uses: EndBug/add-and-commit@v9 # action", true ; "commit action")]
#[test_case("uses: ad-m/github-push-action@master", true ; "push action")]
#[test_case("run: echo hello", false ; "echo")]
#[test_case("uses: actions/checkout@v4", false ; "checkout")]
#[test_case("git pull", false ; "pull is not push")]
#[test_case("gitpush", false ; "no separator")]
#[test_case("", false ; "empty text")]
fn test_classify(text: &str, expected: bool) {
    assert_eq!(PushClassifier::new().classify(text), expected);
}

// =============================================================================
// Permission Table
// =============================================================================

#[test_case("", VerdictKind::MissingPermission ; "no permissions")]
#[test_case("permissions: write-all\n", VerdictKind::Permitted ; "root write-all")]
#[test_case("permissions: read-all\n", VerdictKind::MissingPermission ; "root read-all")]
#[test_case("permissions:\n  contents: write\n", VerdictKind::Permitted ; "root contents write")]
#[test_case("permissions:\n  contents: read\n", VerdictKind::MissingPermission ; "root contents read")]
#[test_case("permissions: {}\n", VerdictKind::MissingPermission ; "root empty mapping")]
fn test_root_permissions(header: &str, expected: VerdictKind) {
    let workflow = format!("{header}jobs:\n  a:\n    steps:\n      - run: git push\n");
    let verdict = evaluate_content(&workflow, &PushClassifier::new());
    assert_eq!(verdict.kind, expected);
}

#[test_case("    permissions: write-all\n", VerdictKind::Permitted ; "job write-all")]
#[test_case("    permissions:\n      contents: write\n", VerdictKind::Permitted ; "job contents write")]
#[test_case("    permissions:\n      contents: none\n", VerdictKind::MissingPermission ; "job contents none")]
#[test_case("    permissions: write\n", VerdictKind::MissingPermission ; "job bare write scalar")]
fn test_job_permissions(block: &str, expected: VerdictKind) {
    let workflow = format!(
        "jobs:\n  other:\n{block}    steps:\n      - run: echo\n  pusher:\n    steps:\n      - run: git push\n"
    );
    let verdict = evaluate_content(&workflow, &PushClassifier::new());
    assert_eq!(verdict.kind, expected);
}
