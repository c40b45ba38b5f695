//! End-to-end tests running the `snowlint` binary on fixture modules.

use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Runs the binary with an empty global config directory.
fn snowlint(args: &[&str]) -> Output {
    let global = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_snowlint"))
        .args(args)
        .env("SNOWLINT_CONFIG_DIR", global.path())
        .env_remove("RUST_LOG")
        .env_remove("SNOWLINT_CONFIG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn layering_violation_fails_the_check() {
    let shop = fixture("shop");
    let output = snowlint(&["check", shop.to_str().unwrap(), "--format", "compact"]);

    assert_eq!(output.status.code(), Some(1));
    insta::assert_snapshot!(stdout(&output).trim_end(), @"lib/client/client.go:3:8: error [SN012] must not import from internal package");
}

#[test]
fn json_output_reports_counts() {
    let shop = fixture("shop");
    let output = snowlint(&["check", shop.to_str().unwrap(), "--format", "json"]);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["packages_checked"], 2);
    assert_eq!(json["files_checked"], 2);
    assert_eq!(json["violations"][0]["code"], "SN012");
    assert_eq!(json["violations"][0]["severity"], "error");
}

#[test]
fn rule_filter_can_silence_the_failure() {
    let shop = fixture("shop");
    let output = snowlint(&[
        "check",
        shop.to_str().unwrap(),
        "--format",
        "compact",
        "--rules",
        "banned-import,SN001",
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
}

#[test]
fn clean_module_passes() {
    let clean = fixture("clean");
    let output = snowlint(&["check", clean.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Found 0 error(s), 0 warning(s), 0 info(s) in 1 file(s)"));
}

#[test]
fn list_rules_shows_every_code() {
    let output = snowlint(&["list-rules"]);
    assert!(output.status.success());

    let listing = stdout(&output);
    for code in (1..=14).map(|n| format!("SN{n:03}")) {
        assert!(listing.contains(&code), "missing {code}");
    }
    assert!(listing.contains("operation-pair"));
}

#[test]
fn missing_directory_is_an_error() {
    let output = snowlint(&["check", "/nonexistent/snowlint-fixture"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load packages"));
}
