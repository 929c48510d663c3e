use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

use skillprof::test_utils::samples;

fn skillprof(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("skillprof").unwrap();
    cmd.current_dir(dir)
        .env_remove("SKILLPROF_CONFIG")
        .env_remove("SKILLPROF_TAXONOMY")
        .env_remove("SKILLPROF_THREADS")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd
}

fn json_stdout(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_cli_help() {
    let dir = tempdir().unwrap();
    skillprof(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("analyze"));
}

#[test]
fn test_cli_version() {
    let dir = tempdir().unwrap();
    skillprof(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_analyze_human_output() {
    let dir = tempdir().unwrap();
    let cv = dir.path().join("cv.txt");
    std::fs::write(&cv, samples::TECH_RESUME).unwrap();

    skillprof(dir.path())
        .args(["analyze", cv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skill profile"))
        .stdout(predicate::str::contains("Python"));
}

#[test]
fn test_analyze_json_with_certification() {
    let dir = tempdir().unwrap();
    let cv = dir.path().join("cv.txt");
    let cert = dir.path().join("cert.txt");
    std::fs::write(&cv, samples::TECH_RESUME).unwrap();
    std::fs::write(&cert, samples::AWS_CERTIFICATE).unwrap();

    let output = skillprof(dir.path())
        .args(["--machine", "analyze", cv.to_str().unwrap(), "-c", cert.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["status"], "ok");
    let profile = json["data"]["profile"].as_array().unwrap();
    let aws = profile.iter().find(|r| r["name"] == "AWS").unwrap();
    assert_eq!(aws["is_backed"], true);
    assert_eq!(aws["backing_certificate"], "AWS Certified Solutions Architect");
    assert_eq!(aws["issuer"], "AWS");
    assert!(aws.get("issued").is_none());
    assert_eq!(json["data"]["documents"]["documents"].as_array().unwrap().len(), 2);
}

#[test]
fn test_analyze_missing_file_is_structured_error() {
    let dir = tempdir().unwrap();
    let output = skillprof(dir.path())
        .args(["-O", "json", "analyze", "nope.txt"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["status"]["error"]["code"], "DOCUMENT_NOT_FOUND");
    assert_eq!(json["status"]["error"]["numeric_code"], 401);
}

#[test]
fn test_analyze_empty_file_fails() {
    let dir = tempdir().unwrap();
    let blank = dir.path().join("blank.txt");
    std::fs::write(&blank, "  \n").unwrap();
    skillprof(dir.path())
        .args(["analyze", blank.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E402"));
}

#[test]
fn test_resolve_reports_canonical_names() {
    let dir = tempdir().unwrap();
    let output = skillprof(dir.path())
        .args(["--machine", "resolve", "a strong Python", "dbms", "Underwater Basketweaving"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = json_stdout(&output);
    let data = json["data"].as_array().unwrap();
    assert_eq!(data[0]["canonical"], "Python");
    assert_eq!(data[0]["cleaned"], "Python");
    assert_eq!(data[1]["canonical"], "Database Management Systems");
    assert_eq!(data[1]["exact"], true);
    assert!(data[2]["canonical"].is_null());
}

#[test]
fn test_score_explains_votes() {
    let dir = tempdir().unwrap();
    let output = skillprof(dir.path())
        .args([
            "--machine",
            "score",
            "python",
            "--context",
            "5+ years of enterprise Python architecture, led the team",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["data"]["skill"], "Python");
    assert_eq!(json["data"]["assessment"]["level"], "Expert");
    assert!(!json["data"]["assessment"]["votes"].as_array().unwrap().is_empty());
}

#[test]
fn test_project_config_is_validated() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("skillprof.toml"),
        "[scoring]\nbacking_boost = 3.0\n",
    )
    .unwrap();
    skillprof(dir.path())
        .args(["resolve", "python"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("backing_boost"));
}

#[test]
fn test_custom_taxonomy_flag() {
    let dir = tempdir().unwrap();
    let taxonomy = dir.path().join("extra.toml");
    std::fs::write(&taxonomy, "robotics_skills = [\"ROS\"]\n").unwrap();
    let output = skillprof(dir.path())
        .args(["--machine", "--taxonomy", taxonomy.to_str().unwrap(), "resolve", "ros"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["data"][0]["canonical"], "ROS");
    assert_eq!(json["data"][0]["category"], "domain:robotics");
}

#[test]
fn test_learned_skills_resolve_on_next_run() {
    let dir = tempdir().unwrap();
    let cv = dir.path().join("cv.txt");
    let learned = dir.path().join("learned.json");
    std::fs::write(&cv, "Proficient in Python, SQL and Underwater Basketweaving").unwrap();

    let output = skillprof(dir.path())
        .args([
            "--machine",
            "analyze",
            cv.to_str().unwrap(),
            "--learn-into",
            learned.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["data"]["learned"]["skills"][0], "Underwater Basketweaving");
    assert!(learned.exists());

    let output = skillprof(dir.path())
        .args([
            "--machine",
            "--taxonomy",
            learned.to_str().unwrap(),
            "resolve",
            "underwater basketweaving",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["data"][0]["canonical"], "Underwater Basketweaving");
    assert_eq!(json["data"][0]["category"], "technical");

    let output = skillprof(dir.path())
        .args(["--machine", "--taxonomy", learned.to_str().unwrap(), "analyze", cv.to_str().unwrap()])
        .output()
        .unwrap();
    let json = json_stdout(&output);
    let profile = json["data"]["profile"].as_array().unwrap();
    assert!(profile.iter().any(|r| r["name"] == "Underwater Basketweaving"));
}

#[test]
fn test_learn_threshold_comes_from_config() {
    let dir = tempdir().unwrap();
    let cv = dir.path().join("cv.txt");
    std::fs::write(&cv, "Proficient in Python, SQL and Underwater Basketweaving").unwrap();
    std::fs::write(dir.path().join("skillprof.toml"), "[taxonomy]\nlearn_threshold = 0.95\n").unwrap();

    let output = skillprof(dir.path())
        .args(["--machine", "analyze", cv.to_str().unwrap(), "--learn-into", "learned.yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = json_stdout(&output);
    assert!(json["data"]["learned"]["skills"].as_array().unwrap().is_empty());
}
