//! Integration tests for the `gh` binary

#![allow(deprecated)] // cargo_bin is the standard way to test CLI binaries

use assert_cmd::Command;
use mockito::Server;
use predicates::prelude::*;

/// An API URL nothing listens on, so any request would fail loudly.
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

fn gh() -> Command {
    let mut cmd = Command::cargo_bin("gh").unwrap();
    cmd.env_remove("GITHUB_TOKEN")
        .env_remove("GH_LOG")
        .env("GITHUB_OWNER", "acme")
        .env("GITHUB_REPO", "widgets")
        .env("GITHUB_API_URL", UNREACHABLE_API);
    cmd
}

// =============================================================================
// Usage
// =============================================================================

#[test]
fn test_no_arguments_prints_usage() {
    gh().assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("GitHub from the command line"))
        .stderr(predicate::str::contains("pulls"));
}

#[test]
fn test_help_flags_print_usage() {
    for flag in ["-h", "--help"] {
        gh().arg(flag)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Usage:"));
    }
}

#[test]
fn test_unknown_command_prints_usage() {
    gh().arg("deploy")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_usage_is_checked_before_environment() {
    gh().env_remove("GITHUB_OWNER")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("GITHUB_OWNER").not());
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_missing_owner() {
    gh().env_remove("GITHUB_OWNER")
        .arg("pulls")
        .assert()
        .code(1)
        .stderr("GITHUB_OWNER environment variable must be set\n");
}

#[test]
fn test_missing_repo() {
    gh().env("GITHUB_REPO", "")
        .arg("issues")
        .assert()
        .code(1)
        .stderr("GITHUB_REPO environment variable must be set\n");
}

// =============================================================================
// Merge Arguments
// =============================================================================

#[test]
fn test_merge_without_number() {
    gh().arg("merge")
        .assert()
        .code(1)
        .stderr("gh: merge: missing pull request number\n");
}

#[test]
fn test_merge_with_non_numeric_number() {
    gh().args(["merge", "abc"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("gh: invalid pull request number \"abc\": invalid digit found in string\n");
}

// =============================================================================
// Remote Calls
// =============================================================================

#[test]
fn test_pulls_prints_aligned_open_pulls() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/repos/acme/widgets/pulls")
        .with_status(200)
        .with_body(
            r#"[
                {"number": 3, "state": "open", "title": "Add knobs", "html_url": "https://github.com/acme/widgets/pull/3", "user": {"login": "alice"}},
                {"number": 2, "state": "closed", "title": "Old", "html_url": "https://github.com/acme/widgets/pull/2", "user": {"login": "bob"}},
                {"number": 1, "state": "open", "title": "Fix dials", "html_url": "https://github.com/acme/widgets/pull/1", "user": {"login": "christopher"}}
            ]"#,
        )
        .create();

    gh().env("GITHUB_API_URL", server.url())
        .arg("pulls")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(
            "alice        https://github.com/acme/widgets/pull/3  Add knobs\n\
             christopher  https://github.com/acme/widgets/pull/1  Fix dials\n",
        );
}

#[test]
fn test_issues_prints_empty_assignee() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/repos/acme/widgets/issues")
        .with_status(200)
        .with_body(
            r#"[
                {"number": 8, "state": "open", "title": "Crash", "html_url": "u8", "assignee": null},
                {"number": 7, "state": "open", "title": "Docs", "html_url": "u7", "assignee": {"login": "dave"}}
            ]"#,
        )
        .create();

    gh().env("GITHUB_API_URL", server.url())
        .arg("issues")
        .assert()
        .success()
        .stdout("        u8      Crash\ndave    u7      Docs\n");
}

#[test]
fn test_merge_prints_result() {
    let mut server = Server::new();
    let mock = server
        .mock("PUT", "/repos/acme/widgets/pulls/42/merge")
        .match_header("authorization", "Bearer secret")
        .with_status(200)
        .with_body(r#"{"sha": "6dcb09b", "merged": true, "message": "Pull Request successfully merged"}"#)
        .create();

    gh().env("GITHUB_API_URL", server.url())
        .env("GITHUB_TOKEN", "secret")
        .args(["merge", "42"])
        .assert()
        .success()
        .stdout("merged=true sha=6dcb09b message=\"Pull Request successfully merged\"\n");

    mock.assert();
}

#[test]
fn test_remote_error_is_prefixed() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/repos/acme/widgets/pulls")
        .with_status(401)
        .with_body(r#"{"message": "Bad credentials"}"#)
        .create();

    gh().env("GITHUB_API_URL", server.url())
        .arg("pulls")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("gh: GET "))
        .stderr(predicate::str::contains("401 Unauthorized Bad credentials"));
}

#[test]
fn test_unreachable_service_fails() {
    gh().arg("issues")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("gh: "));
}
