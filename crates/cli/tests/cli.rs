//! End-to-end tests for the curator binary

use assert_cmd::Command;
use predicates::prelude::*;

const CURATOR_VARS: &[&str] = &[
    "ELASTICSEARCH_HOST",
    "PERCENTAGE_THRESHOLD",
    "INDEX_NAME_PREFIXES",
    "DRY_RUN",
    "RETENTION_DAYS",
    "CURATOR_POLICY",
    "CURATOR_LOG_FORMAT",
    "ELASTICSEARCH_TIMEOUT_SECS",
];

fn curator() -> Command {
    let mut cmd = Command::cargo_bin("curator").unwrap();
    for var in CURATOR_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    curator()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("budget"));
}

#[test]
fn test_percentage_above_range_is_rejected() {
    curator()
        .args(["--percentage", "150", "plan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Percentage threshold"));
}

#[test]
fn test_invalid_dry_run_env_is_rejected() {
    curator()
        .env("DRY_RUN", "sometimes")
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DRY_RUN='sometimes'"));
}

#[test]
fn test_age_policy_without_retention_days_is_rejected() {
    curator()
        .args(["--policy", "age", "plan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RETENTION_DAYS"));
}

#[test]
fn test_unknown_policy_flag_is_rejected() {
    curator()
        .args(["--policy", "lru", "plan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown retention policy"));
}

#[test]
fn test_unreachable_cluster_fails_run() {
    curator()
        .env("ELASTICSEARCH_TIMEOUT_SECS", "2")
        .args(["--host", "http://127.0.0.1:9", "--log-format", "json", "run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("network error"));
}
