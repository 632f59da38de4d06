// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PROJECT_CONFIG: &str = r#"
extends = ["@commitlint/config-conventional"]

[rules]
type-empty = [2, "never"]
type-enum = [2, "always", ["feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert"]]
subject-empty = [2, "never"]
subject-case = [2, "always", ["sentence-case"]]
header-max-length = [2, "always", 72]
scope-empty = [0]
body-max-line-length = [0]
footer-max-line-length = [0]
"#;

fn workspace(config: Option<(&str, &str)>) -> TempDir {
    let dir = TempDir::new().unwrap();
    if let Some((name, content)) = config {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

fn commitlint(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("commitlint").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("COMMITLINT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn message(commit_type: &str, subject: &str) -> String {
    serde_json::json!({
        "type": commit_type,
        "subject": subject,
        "header": format!("{}: {}", commit_type, subject),
    })
    .to_string()
}

#[test]
fn check_accepts_valid_message() {
    let dir = workspace(Some(("commitlint.toml", PROJECT_CONFIG)));

    commitlint(dir.path())
        .arg("check")
        .write_stdin(message("fix", "Handle null token"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid"));
}

#[test]
fn check_is_the_default_command() {
    let dir = workspace(Some(("commitlint.toml", PROJECT_CONFIG)));

    commitlint(dir.path())
        .write_stdin(message("docs", "Fix typo in README"))
        .assert()
        .success();
}

#[test]
fn check_rejects_empty_message() {
    let dir = workspace(Some(("commitlint.toml", PROJECT_CONFIG)));

    commitlint(dir.path())
        .arg("check")
        .write_stdin(r#"{"type": "", "subject": "", "header": ""}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("type-empty"))
        .stdout(predicate::str::contains("subject-empty"))
        .stderr(predicate::str::contains("2 error(s)"));
}

#[test]
fn check_rejects_lowercase_subject() {
    let dir = workspace(Some(("commitlint.toml", PROJECT_CONFIG)));

    commitlint(dir.path())
        .arg("check")
        .write_stdin(message("fix", "handle null token"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("subject-case"));
}

#[test]
fn check_rejects_unknown_type() {
    let dir = workspace(Some(("commitlint.toml", PROJECT_CONFIG)));

    commitlint(dir.path())
        .arg("check")
        .write_stdin(message("bugfix", "Handle null token"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("type-enum"));
}

#[test]
fn check_header_length_boundary() {
    let dir = workspace(Some(("commitlint.toml", PROJECT_CONFIG)));
    let at_limit = format!("H{}", "a".repeat(66));

    commitlint(dir.path())
        .arg("check")
        .write_stdin(message("fix", &at_limit))
        .assert()
        .success();

    commitlint(dir.path())
        .arg("check")
        .write_stdin(message("fix", &format!("{}a", at_limit)))
        .assert()
        .failure()
        .stdout(predicate::str::contains("header-max-length"));
}

#[test]
fn check_reads_message_file() {
    let dir = workspace(Some(("commitlint.toml", PROJECT_CONFIG)));
    fs::write(dir.path().join("msg.json"), message("feat", "Add login")).unwrap();

    commitlint(dir.path())
        .args(["check", "msg.json"])
        .assert()
        .success();
}

#[test]
fn check_rejects_malformed_input() {
    let dir = workspace(Some(("commitlint.toml", PROJECT_CONFIG)));

    commitlint(dir.path())
        .arg("check")
        .write_stdin("fix: Handle null token")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid message input"));
}

#[test]
fn warnings_pass_unless_strict() {
    let config = r#"
[rules]
subject-full-stop = [1, "never", "."]
"#;
    let dir = workspace(Some(("commitlint.toml", config)));
    let input = message("fix", "Handle null token.");

    commitlint(dir.path())
        .arg("check")
        .write_stdin(input.clone())
        .assert()
        .success()
        .stdout(predicate::str::contains("subject-full-stop"));

    commitlint(dir.path())
        .args(["check", "--strict"])
        .write_stdin(input)
        .assert()
        .failure();
}

#[test]
fn check_json_output() {
    let dir = workspace(Some(("commitlint.toml", PROJECT_CONFIG)));

    let output = commitlint(dir.path())
        .args(["check", "--format", "json"])
        .write_stdin(message("fix", "handle null token"))
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["outcome"], "error");
    assert_eq!(json["violations"][0]["rule"], "subject-case");
    assert_eq!(json["violations"][0]["field"], "subject");
}

#[test]
fn unknown_rule_fails_before_reading_input() {
    let config = r#"
[rules]
subject-rhymes = [2, "always"]
"#;
    let dir = workspace(Some(("commitlint.toml", config)));

    commitlint(dir.path())
        .arg("check")
        .write_stdin(message("fix", "Handle null token"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown rule: 'subject-rhymes'"));
}

#[test]
fn invalid_severity_is_reported() {
    let config = r#"
[rules]
type-empty = [5, "never"]
"#;
    let dir = workspace(Some(("commitlint.toml", config)));

    commitlint(dir.path())
        .arg("print-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid severity"));
}

#[test]
fn no_config_uses_project_preset() {
    let dir = workspace(None);

    commitlint(dir.path())
        .arg("check")
        .write_stdin(message("fix", "Handle null token"))
        .assert()
        .success();

    commitlint(dir.path())
        .arg("check")
        .write_stdin(message("fix", "handle null token"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("subject-case"));
}

#[test]
fn conventional_preset_by_name() {
    let config = r#"extends = ["conventional"]"#;
    let dir = workspace(Some(("commitlint.toml", config)));

    // The conventional rules forbid sentence-case subjects.
    commitlint(dir.path())
        .arg("check")
        .write_stdin(message("fix", "handle null token"))
        .assert()
        .success();

    commitlint(dir.path())
        .arg("check")
        .write_stdin(message("fix", "Handle null token"))
        .assert()
        .failure();
}

#[test]
fn json_config_file() {
    let config = r#"{"extends": ["conventional"], "rules": {"type-enum": [0]}}"#;
    let dir = workspace(Some((".commitlintrc.json", config)));

    commitlint(dir.path())
        .arg("check")
        .write_stdin(message("bugfix", "handle null token"))
        .assert()
        .success();
}

#[test]
fn explicit_config_path() {
    let dir = workspace(Some(("lint.toml", PROJECT_CONFIG)));

    commitlint(dir.path())
        .args(["--config", "lint.toml", "check"])
        .write_stdin(message("fix", "handle null token"))
        .assert()
        .failure();

    commitlint(dir.path())
        .args(["--config", "missing.toml", "check"])
        .write_stdin(message("fix", "Handle null token"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn print_config_shows_merged_rules() {
    let dir = workspace(Some(("commitlint.toml", PROJECT_CONFIG)));

    let output = commitlint(dir.path())
        .args(["print-config", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["rules"]["header-max-length"], serde_json::json!([2, "always", 72]));
    assert_eq!(json["rules"]["scope-empty"], serde_json::json!([0, "always"]));
    assert_eq!(
        json["rules"]["body-max-line-length"],
        serde_json::json!([0, "always", 100])
    );
}

#[test]
fn list_rules_names_every_rule() {
    let dir = workspace(None);

    commitlint(dir.path())
        .arg("list-rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("type-enum"))
        .stdout(predicate::str::contains("header-max-length"))
        .stdout(predicate::str::contains("footer-max-line-length"));
}

#[test]
fn init_writes_configuration_once() {
    let dir = workspace(None);

    commitlint(dir.path()).arg("init").assert().success();
    let written = fs::read_to_string(dir.path().join("commitlint.toml")).unwrap();
    assert!(written.contains("header-max-length = [2, \"always\", 72]"));

    commitlint(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    commitlint(dir.path())
        .args(["init", "--force", "--preset", "minimal"])
        .assert()
        .success();
    let written = fs::read_to_string(dir.path().join("commitlint.toml")).unwrap();
    assert!(!written.contains("[rules]"));
}

#[test]
fn init_output_is_a_working_configuration() {
    let dir = workspace(None);
    commitlint(dir.path()).arg("init").assert().success();

    commitlint(dir.path())
        .arg("check")
        .write_stdin(message("fix", "Handle null token"))
        .assert()
        .success();
}
