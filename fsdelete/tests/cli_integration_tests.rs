// fsdelete/tests/cli_integration_tests.rs
//! Command-line integration tests for the `fsdelete` binary.
//!
//! Each test builds a throwaway fileset and deployment file under a temporary
//! directory, runs the binary with `assert_cmd`, and checks both the process
//! output and what is left on disk.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_log::test;

/// A deployment rooted in a temporary directory.
struct Deployment {
    dir: TempDir,
    config: PathBuf,
}

impl Deployment {
    /// Writes a deployment file for fileset `staging` (at `<tmp>/data`) with the
    /// given pattern and directory, and creates `<tmp>/data/out` with `files`.
    fn new(delete_regex: &str, directory: &str, files: &[&str]) -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("data").join("out");
        fs::create_dir_all(&out)?;
        for name in files {
            fs::write(out.join(name), "x")?;
        }
        let config = dir.path().join("deploy.yaml");
        fs::write(
            &config,
            format!(
                "filesets:\n  staging: data\npostAction:\n  filesetName: staging\n  deleteRegex: '{}'\n  directory: '{}'\n",
                delete_regex, directory
            ),
        )?;
        Ok(Self { dir, config })
    }

    fn out(&self) -> PathBuf {
        self.dir.path().join("data").join("out")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("fsdelete").unwrap();
        cmd.env_remove("FSDELETE_CONFIG");
        cmd.env_remove("RUST_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }
}

fn exists(dir: &Path, name: &str) -> bool {
    dir.join(name).exists()
}

#[test]
fn test_describe_prints_registration_record() -> Result<()> {
    let output = Command::cargo_bin("fsdelete").unwrap().arg("describe").output()?;
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["name"], "FilesetDelete");
    assert_eq!(json["pluginType"], "postaction");
    assert_eq!(json["properties"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[test]
fn test_validate_accepts_good_configuration() -> Result<()> {
    let deployment = Deployment::new(r"report_.*\.csv", "${outputDir}", &[])?;
    deployment
        .command()
        .args(["validate", "--config"])
        .arg(&deployment.config)
        .assert()
        .success()
        .stderr(predicate::str::contains("is valid"))
        .stderr(predicate::str::contains("resolved from runtime arguments"));
    Ok(())
}

#[test]
fn test_validate_rejects_invalid_regex() -> Result<()> {
    let deployment = Deployment::new("report_(", "out", &[])?;
    deployment
        .command()
        .args(["validate", "--config"])
        .arg(&deployment.config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error[invalid_pattern]"));
    Ok(())
}

#[test]
fn test_validate_reads_config_from_environment() -> Result<()> {
    let deployment = Deployment::new(r"\.tmp$", "out", &[])?;
    let mut cmd = deployment.command();
    cmd.env("FSDELETE_CONFIG", &deployment.config);
    cmd.arg("validate").assert().success();
    Ok(())
}

#[test]
fn test_run_succeeded_deletes_matches() -> Result<()> {
    let deployment = Deployment::new(r"report_.*\.csv", "out", &["report_2023.csv", "report_2024.csv", "summary.txt"])?;

    deployment
        .command()
        .args(["run", "--status", "succeeded", "--config"])
        .arg(&deployment.config)
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted report_2023.csv"))
        .stdout(predicate::str::contains("Scanned 3 entries, deleted 2."));

    let out = deployment.out();
    assert!(!exists(&out, "report_2023.csv"));
    assert!(!exists(&out, "report_2024.csv"));
    assert!(exists(&out, "summary.txt"));
    Ok(())
}

#[test]
fn test_run_failed_deletes_nothing() -> Result<()> {
    let deployment = Deployment::new(r"report_.*\.csv", "out", &["report_2023.csv", "summary.txt"])?;

    let output = deployment
        .command()
        .args(["run", "--status", "failed", "--json", "--config"])
        .arg(&deployment.config)
        .output()?;
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["entriesScanned"], 0);
    assert_eq!(json["entriesDeleted"], 0);
    assert!(exists(&deployment.out(), "report_2023.csv"));
    Ok(())
}

#[test]
fn test_run_resolves_placeholder_from_arguments() -> Result<()> {
    let deployment = Deployment::new(r"\.tmp$", "${target}", &["a.tmp", "b.avro"])?;

    let output = deployment
        .command()
        .args(["run", "-s", "succeeded", "--json", "-a", "target=out", "--config"])
        .arg(&deployment.config)
        .output()?;
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["deleted"], serde_json::json!(["a.tmp"]));
    assert!(exists(&deployment.out(), "b.avro"));
    Ok(())
}

#[test]
fn test_run_without_placeholder_value_fails() -> Result<()> {
    let deployment = Deployment::new(r"\.tmp$", "${target}", &["a.tmp"])?;
    deployment
        .command()
        .args(["run", "--status", "succeeded", "--config"])
        .arg(&deployment.config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error[unresolved_placeholder]"));
    assert!(exists(&deployment.out(), "a.tmp"));
    Ok(())
}

#[test]
fn test_run_on_missing_directory_fails() -> Result<()> {
    let deployment = Deployment::new(".*", "missing", &["a.tmp"])?;
    deployment
        .command()
        .args(["run", "--status", "succeeded", "--config"])
        .arg(&deployment.config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[directory_unavailable]"));
    Ok(())
}

#[test]
fn test_run_reports_partial_failure() -> Result<()> {
    let deployment = Deployment::new("_match", "out", &["a_match", "c_match"])?;
    let blocker = deployment.out().join("b_match");
    fs::create_dir_all(&blocker)?;
    fs::write(blocker.join("inner"), "x")?;

    deployment
        .command()
        .args(["run", "--status", "succeeded", "--config"])
        .arg(&deployment.config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[delete_partial_failure]"))
        .stderr(predicate::str::contains("after 1 successful deletion(s)"));

    assert!(!exists(&deployment.out(), "a_match"));
    assert!(exists(&deployment.out(), "c_match"));
    Ok(())
}

#[test]
fn test_bad_runtime_argument_is_a_usage_error() -> Result<()> {
    let deployment = Deployment::new(".*", "out", &[])?;
    deployment
        .command()
        .args(["run", "--status", "succeeded", "-a", "novalue", "--config"])
        .arg(&deployment.config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected KEY=VALUE"));
    Ok(())
}
