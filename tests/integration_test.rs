//! Integration tests for the guardrails CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn get_cmd() -> Command {
    let mut cmd = Command::cargo_bin("guardrails").unwrap();
    // The host environment must not trip the sensitive-env guard
    for name in [
        "AWS_SECRET_ACCESS_KEY",
        "AWS_SESSION_TOKEN",
        "GITHUB_TOKEN",
        "NPM_TOKEN",
        "OPENAI_API_KEY",
    ] {
        cmd.env_remove(name);
    }
    cmd
}

#[tokio::test]
async fn test_help_command() {
    get_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("guardrails"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("apply"));
}

#[tokio::test]
async fn test_version_command() {
    get_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("guardrails"));
}

#[tokio::test]
async fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".guardrails.toml");

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--non-interactive"])
        .assert()
        .success();

    assert!(config_path.exists(), "Configuration file should be created");

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[rules.safe-rm-intercept]"));
    assert!(content.contains("[[custom]]"), "Starter should document custom rules");
}

#[tokio::test]
async fn test_init_refuses_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--non-interactive"])
        .assert()
        .success();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--non-interactive"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[tokio::test]
async fn test_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".guardrails.toml");

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--non-interactive"])
        .assert()
        .success();

    fs::write(&config_path, "# scribbled over\n").unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--non-interactive", "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[rules.safe-rm-intercept]"));
}

#[tokio::test]
async fn test_check_clean_command_exits_zero() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "echo hello"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("All clear"));
}

#[tokio::test]
async fn test_check_rm_warns_with_trash_suggestion() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "rm -rf ./build"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("safe-rm-intercept"))
        .stdout(predicate::str::contains("trash -rf ./build"));
}

#[tokio::test]
async fn test_check_whitelisted_path_is_clean() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "rm -rf /tmp/scratch"])
        .assert()
        .code(0);
}

#[tokio::test]
async fn test_check_git_restore_dot_blocks() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "git restore ."])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("safe-git-restore-dot"))
        .stdout(predicate::str::contains("Command blocked"));
}

#[tokio::test]
async fn test_check_bypass_flag_downgrades_block() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "git restore .", "--i-know-what-im-doing"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("bypassed with --i-know-what-im-doing"));
}

#[tokio::test]
async fn test_check_json_output_parses() {
    let temp_dir = TempDir::new().unwrap();

    let assert = get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "--format", "json", "rm -rf ./build"])
        .assert()
        .code(2);
    let output = assert.get_output();

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["metadata"]["command"], "rm -rf ./build");
    assert_eq!(report["summary"]["warnings"], 1);
    assert_eq!(report["results"][0]["rule_id"], "safe-rm-intercept");
    assert_eq!(report["results"][0]["action"], "warn");
    assert_eq!(report["results"][0]["fixable"], true);
}

#[tokio::test]
async fn test_check_rules_filter_limits_evaluation() {
    let temp_dir = TempDir::new().unwrap();

    // The rm command only violates a rule excluded by the filter
    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "--rules", "safe-git-force-push", "rm -rf ./build"])
        .assert()
        .code(0);
}

#[tokio::test]
async fn test_check_unknown_rule_id_is_invalid_args() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "--rules", "does-not-exist", "echo hi"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown rule id"));
}

#[tokio::test]
async fn test_audit_clean_environment_exits_zero() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .arg("audit")
        .assert()
        .code(0);
}

#[tokio::test]
async fn test_audit_flags_sensitive_env() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .env("NPM_TOKEN", "npm_example")
        .arg("audit")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("guard-sensitive-env"));
}

#[tokio::test]
async fn test_audit_writes_json_report_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("report.json");

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["audit", "--output"])
        .arg(&report_path)
        .assert()
        .code(0);

    assert!(report_path.exists(), "JSON report file should be created");

    let content = fs::read_to_string(&report_path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(report["metadata"]["command"].is_null());
    assert_eq!(report["summary"]["rules_evaluated"], 9);
}

#[tokio::test]
async fn test_apply_dry_run_makes_no_changes() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["apply", "--dry-run", "cat notes.txt"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("bat notes.txt"))
        .stdout(predicate::str::contains("Dry run mode - no changes made"));
}

#[tokio::test]
async fn test_apply_nothing_to_fix() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["apply", "--yes", "echo hi"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Nothing to fix"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_apply_resolves_replacement_tool_from_path() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let bin_dir = temp_dir.path().join("bin");
    fs::create_dir(&bin_dir).unwrap();

    // A stand-in replacement tool that the fixer can resolve
    let fake_trash = bin_dir.join("trash");
    fs::write(&fake_trash, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(&fake_trash, fs::Permissions::from_mode(0o755)).unwrap();

    let path = format!(
        "{}:{}",
        bin_dir.display(),
        std::env::var("PATH").unwrap_or_default()
    );

    get_cmd()
        .current_dir(temp_dir.path())
        .env("PATH", &path)
        .args(["apply", "--yes", "rm -rf ./build"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("trash -rf ./build"))
        .stdout(predicate::str::contains("1 applied"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_apply_fails_when_replacement_tool_is_missing() {
    let temp_dir = TempDir::new().unwrap();
    let empty_bin = temp_dir.path().join("bin");
    fs::create_dir(&empty_bin).unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .env("PATH", &empty_bin)
        .args(["apply", "--yes", "cat notes.txt"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("1 failed"));
}

#[tokio::test]
async fn test_list_shows_builtin_rules() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered rules:"))
        .stdout(predicate::str::contains("safe-rm-intercept"))
        .stdout(predicate::str::contains("guard-sensitive-env"))
        .stdout(predicate::str::contains("9 rule(s)"));
}

#[tokio::test]
async fn test_list_reflects_disabled_override() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".guardrails.toml"),
        "[rules.safe-rm-intercept]\nenabled = false\n",
    )
    .unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("disabled"))
        .stdout(predicate::str::contains("9 rule(s)"));
}

#[tokio::test]
async fn test_project_config_overrides_severity() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".guardrails.toml"),
        "[rules.safe-rm-intercept]\nseverity = \"error\"\n",
    )
    .unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "rm -rf ./build"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("safe-rm-intercept"));
}

#[tokio::test]
async fn test_custom_rule_from_project_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".guardrails.toml"),
        r#"[[custom]]
id = "no-sudo-npm"
kind = "command-pattern"
pattern = '^sudo\s+npm'
severity = "error"
message = "Do not run npm as root"
"#,
    )
    .unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "sudo npm install"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no-sudo-npm"));
}

#[tokio::test]
async fn test_explicit_config_flag() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "[rules.safe-rm-intercept]\nenabled = false\n").unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["--config", "custom.toml", "check", "rm -rf ./build"])
        .assert()
        .code(0);
}

#[tokio::test]
async fn test_missing_explicit_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["--config", "nope.toml", "check", "echo hi"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to load configuration"));
}
