/// Integration tests for CLI help and version output
use super::common::{cmd, TestContext};
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    let ctx = TestContext::default();
    cmd(&ctx)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sourcemap-remap"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("flatten"))
        .stdout(predicate::str::contains("lookup"));
}

#[test]
fn test_flatten_help() {
    let ctx = TestContext::default();
    cmd(&ctx)
        .args(["flatten", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--exclude-content"))
        .stdout(predicate::str::contains("--read-content"))
        .stdout(predicate::str::contains("--max-depth"));
}

#[test]
fn test_version_flag() {
    let ctx = TestContext::default();
    cmd(&ctx)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_completions_for_bash() {
    let ctx = TestContext::default();
    cmd(&ctx)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sourcemap-remap"));
}

#[test]
fn test_missing_subcommand_fails() {
    let ctx = TestContext::default();
    cmd(&ctx).assert().failure();
}

#[test]
fn test_verbose_logs_build_metadata() {
    let ctx = TestContext::default();
    cmd(&ctx)
        .args(["-v", "completions", "bash"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting sourcemap-remap"))
        .stderr(predicate::str::contains("git_hash"))
        .stderr(predicate::str::contains("rustc"));
}
