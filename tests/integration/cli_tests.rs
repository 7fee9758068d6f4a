use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn roastgen() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("roastgen").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("ROASTGEN_FILTERED")
        .env_remove("ROASTGEN_SEED")
        .env_remove("ROASTGEN_FORMAT")
        .arg("--no-color");
    cmd
}

#[test]
fn test_cli_version() {
    roastgen().arg("--version").assert().success();
}

#[test]
fn test_cli_help() {
    roastgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pick"));
}

#[test]
fn test_cli_default_prints_three_labeled_lines() {
    let output = roastgen().arg("--no-profanity").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    for (i, line) in lines.iter().enumerate() {
        assert!(line.starts_with(&format!("Sample Roast #{}: ", i + 1)));
    }
}

#[test]
fn test_cli_pick() {
    roastgen()
        .args(["pick", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hannif"));
}

#[test]
fn test_cli_pick_invalid_category() {
    roastgen()
        .args(["pick", "4"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid category 4"));
}

#[test]
fn test_cli_pick_not_a_number() {
    roastgen().args(["pick", "two"]).assert().failure();
}

#[test]
fn test_cli_json_output() {
    let output = roastgen().args(["--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
}

#[test]
fn test_cli_seed_is_reproducible() {
    let first = roastgen().args(["--seed", "42"]).output().unwrap();
    let second = roastgen().args(["--seed", "42"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_cli_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "filtered = true\nformat = \"json\"").unwrap();

    let output = roastgen()
        .arg("--config")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["filtered"], true);
}

#[test]
fn test_cli_bad_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "filtered = [").unwrap();

    roastgen()
        .arg("--config")
        .arg(file.path())
        .assert()
        .code(2);
}

#[test]
fn test_cli_env_filtered() {
    roastgen()
        .env("ROASTGEN_FILTERED", "1")
        .args(["list", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("damn").not());
}
