//! Snapshot-check against a real git repository.
//!
//! Skipped (with a message) when no `git` binary is on PATH.

mod helpers;

use std::path::Path;
use std::process::Command;

use dns_snapshot::{
    snapshot_check, GitTreeStatus, RecordKind, SnapshotError, TreeState, TreeStatus,
};
use helpers::{domains, text, Answer, ScriptedSource};
use tempfile::TempDir;

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args([
            "-c",
            "user.name=dns_snapshot tests",
            "-c",
            "user.email=tests@example.invalid",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

/// Creates a repository with one committed file so HEAD exists.
fn init_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init", "--quiet"]);
    std::fs::write(dir.path().join("README"), "DNS snapshots\n").unwrap();
    git(dir.path(), &["add", "README"]);
    git(dir.path(), &["commit", "--quiet", "-m", "init"]);
    dir
}

fn commit_all(dir: &Path, message: &str) {
    git(dir, &["add", "--all"]);
    git(dir, &["commit", "--quiet", "-m", message]);
}

fn example_source() -> ScriptedSource {
    ScriptedSource::new()
        .answer(
            "example.com",
            RecordKind::A,
            Answer::Values(vec![text("93.184.216.34")]),
        )
        .answer(
            "example.com",
            RecordKind::Soa,
            Answer::Values(vec![text(
                "ns.icann.org. noc.dns.icann.org. 2024081444 7200 3600 1209600 3600",
            )]),
        )
}

#[test]
fn test_git_status_clean_and_dirty() {
    if !git_available() {
        eprintln!("git not found, skipping");
        return;
    }
    let repo = init_repo();
    let status = GitTreeStatus::new();

    assert_eq!(status.state(repo.path()).unwrap(), TreeState::Clean);

    std::fs::write(repo.path().join("README"), "edited\n").unwrap();
    assert_eq!(status.state(repo.path()).unwrap(), TreeState::Dirty);
}

#[test]
fn test_git_status_outside_repository_is_an_error() {
    if !git_available() {
        eprintln!("git not found, skipping");
        return;
    }
    let dir = TempDir::new().unwrap();
    // Keeps git from finding a repository above the temp dir
    std::env::set_var("GIT_CEILING_DIRECTORIES", dir.path().parent().unwrap());
    let status = GitTreeStatus::new();

    let err = status.state(dir.path()).unwrap_err();
    assert!(matches!(err, SnapshotError::StatusCommand { .. }), "{err}");
}

#[test]
fn test_missing_git_binary_is_an_error() {
    let dir = TempDir::new().unwrap();
    let status = GitTreeStatus::with_program("git-binary-that-does-not-exist");

    let err = status.state(dir.path()).unwrap_err();
    assert!(matches!(err, SnapshotError::StatusCommand { .. }), "{err}");
}

#[tokio::test]
async fn test_git_snapshot_idempotent_then_drift() {
    if !git_available() {
        eprintln!("git not found, skipping");
        return;
    }
    let repo = init_repo();
    let source = example_source();
    let status = GitTreeStatus::new();
    let names = domains(&["example.com"]);

    // First snapshot creates an untracked file, which diff-index ignores
    snapshot_check(&source, &status, repo.path(), &names)
        .await
        .unwrap();
    commit_all(repo.path(), "snapshot");

    // Same DNS: file is rewritten with identical content, tree stays clean
    snapshot_check(&source, &status, repo.path(), &names)
        .await
        .unwrap();
    assert_eq!(status.state(repo.path()).unwrap(), TreeState::Clean);

    // DNS changed: drift
    source.set(
        "example.com",
        RecordKind::A,
        Answer::Values(vec![text("93.184.215.14")]),
    );
    let err = snapshot_check(&source, &status, repo.path(), &names)
        .await
        .unwrap_err();
    assert!(matches!(err, SnapshotError::DriftDetected { .. }), "{err}");
}

#[tokio::test]
async fn test_git_snapshot_dirty_precondition_makes_no_queries() {
    if !git_available() {
        eprintln!("git not found, skipping");
        return;
    }
    let repo = init_repo();
    std::fs::write(repo.path().join("README"), "local edit\n").unwrap();

    let source = example_source();
    let err = snapshot_check(
        &source,
        &GitTreeStatus::new(),
        repo.path(),
        &domains(&["example.com"]),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, SnapshotError::DirtyTree { .. }), "{err}");
    assert_eq!(source.query_count(), 0);
    assert!(!repo.path().join("example.com").exists());
}
