/// Integration tests for CLI error handling
use super::common::{cmd, TestContext};
use predicates::prelude::*;

#[test]
fn test_missing_map_file() {
    let ctx = TestContext::default();
    cmd(&ctx)
        .args(["flatten", "does-not-exist.map"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read source map"));
}

#[test]
fn test_malformed_map_json() {
    let ctx = TestContext::default();
    let map = ctx.create_file("bad.map", "{ not json").unwrap();

    cmd(&ctx)
        .arg("flatten")
        .arg(&map)
        .assert()
        .failure()
        .stderr(predicate::str::contains("remap::invalid_map"));
}

#[test]
fn test_unsupported_version() {
    let ctx = TestContext::default();
    let map = ctx
        .create_file(
            "v2.map",
            r#"{"version":2,"sources":[],"names":[],"mappings":""}"#,
        )
        .unwrap();

    cmd(&ctx)
        .arg("flatten")
        .arg(&map)
        .assert()
        .failure()
        .stderr(predicate::str::contains("version"));
}

#[test]
fn test_invalid_transformation_chain() {
    let ctx = TestContext::default();
    let first = ctx
        .create_file(
            "first.map",
            r#"{"version":3,"sources":["a.js","b.js"],"names":[],"mappings":"AAAA,CCAA"}"#,
        )
        .unwrap();
    let second = ctx
        .create_file(
            "second.map",
            r#"{"version":3,"sources":["c.ts"],"names":[],"mappings":"AAAA"}"#,
        )
        .unwrap();

    cmd(&ctx)
        .arg("flatten")
        .arg(&first)
        .arg(&second)
        .assert()
        .failure()
        .stderr(predicate::str::contains("remap::invalid_transformation_map"));
}

#[test]
fn test_lookup_requires_position() {
    let ctx = TestContext::default();
    let map = ctx.create_project().unwrap();

    cmd(&ctx)
        .arg("lookup")
        .arg(&map)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--line"));
}
