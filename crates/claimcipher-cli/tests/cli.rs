//! Exit-status tests for the `claimcipher` binary

use assert_cmd::Command;
use std::fs;

fn claimcipher(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("claimcipher").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("MAX_PAGES")
        .arg("--config")
        .arg(config_dir.join("config.toml"));
    cmd
}

#[test]
fn test_missing_estimate_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("output");

    claimcipher(dir.path())
        .arg("process")
        .arg("--estimate")
        .arg(dir.path().join("missing.pdf"))
        .arg("--output-dir")
        .arg(&output_dir)
        .arg("--no-decode")
        .assert()
        .failure();

    assert!(!output_dir.exists());
}

#[test]
fn test_partial_record_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let estimate = dir.path().join("estimate.txt");
    fs::write(&estimate, "Make: Honda\nMileage: 45,231\n").unwrap();
    let output_dir = dir.path().join("output");

    claimcipher(dir.path())
        .args(["--format", "quiet", "process", "--no-decode", "--year", "soon"])
        .arg("--estimate")
        .arg(&estimate)
        .arg("--bcif")
        .arg(dir.path().join("no-template.pdf"))
        .arg("--output-dir")
        .arg(&output_dir)
        .assert()
        .success();

    assert!(output_dir.join("assembled_data.json").is_file());
    assert!(output_dir.join("claim_summary.txt").is_file());
    assert!(!output_dir.join("filled_bcif.pdf").exists());
}

#[test]
fn test_parse_writes_parsed_data() {
    let dir = tempfile::tempdir().unwrap();
    let estimate = dir.path().join("estimate.txt");
    fs::write(&estimate, "VIN 1HGCM82633A004352\nMake: Honda\n").unwrap();
    let output_dir = dir.path().join("output");

    claimcipher(dir.path())
        .args(["--format", "json", "parse"])
        .arg("--estimate")
        .arg(&estimate)
        .arg("--output-dir")
        .arg(&output_dir)
        .assert()
        .success();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output_dir.join("parsed_data.json")).unwrap())
            .unwrap();
    assert_eq!(parsed["vin"], "1HGCM82633A004352");
    assert_eq!(parsed["make"], "Honda");
    assert!(parsed["year"].is_null());
}

#[test]
fn test_invalid_max_pages_env_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let estimate = dir.path().join("estimate.txt");
    fs::write(&estimate, "Make: Honda\nMileage: 45,231\n").unwrap();

    for value in ["abc", "0"] {
        let output_dir = dir.path().join(format!("output-{}", value));
        claimcipher(dir.path())
            .env("MAX_PAGES", value)
            .args(["--format", "quiet", "process", "--no-decode"])
            .arg("--estimate")
            .arg(&estimate)
            .arg("--bcif")
            .arg(dir.path().join("no-template.pdf"))
            .arg("--output-dir")
            .arg(&output_dir)
            .assert()
            .success();

        assert!(output_dir.join("assembled_data.json").is_file());
    }
}

#[test]
fn test_fields_on_unreadable_template_fails() {
    let dir = tempfile::tempdir().unwrap();

    claimcipher(dir.path())
        .arg("fields")
        .arg("--bcif")
        .arg(dir.path().join("missing.pdf"))
        .assert()
        .failure();
}
