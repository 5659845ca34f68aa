use std::io::Write;

use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("site-checks").unwrap();
    cmd.env_remove("SITE_CHECKS_BACKEND_URL");
    cmd
}

fn site_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn catalog_lists_criteria_in_order() {
    let out = cmd().arg("catalog").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[0].contains("zoning"));
    assert!(lines[2].contains("문화재 규제"));
    assert!(lines[7].contains("land_price"));
}

#[test]
fn analyze_without_site_record_is_a_no_op() {
    let file = site_file("null");
    cmd()
        .args(["analyze", "--format", "json", "--site"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("\"outcome\": \"input_unavailable\""));
}

#[test]
fn analyze_reads_stdin() {
    cmd()
        .args(["analyze", "--format", "json", "--site", "-"])
        .write_stdin("null")
        .assert()
        .success()
        .stdout(contains("input_unavailable"));
}

#[test]
fn analyze_unreachable_backend_prints_notice() {
    let file = site_file(r#"{"lat": 36.47, "lng": 127.09, "slope_deg": 8}"#);
    cmd()
        .args(["analyze", "--backend-url", "http://127.0.0.1:9", "--site"])
        .arg(file.path())
        .assert()
        .failure()
        .stdout(contains("8대 체크 분석 실패"));
}

#[test]
fn analyze_json_report_keeps_fault_detail_off_stdout() {
    let file = site_file(r#"{"lat": 36.47, "lng": 127.09}"#);
    let out = cmd()
        .args(["analyze", "--format", "json", "--backend-url", "http://127.0.0.1:9", "--site"])
        .arg(file.path())
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["result"]["outcome"], "failed");
    assert!(report["result"].get("reason").is_none());
    assert!(!String::from_utf8(out).unwrap().contains("127.0.0.1"));
}

#[test]
fn analyze_rejects_malformed_site_record() {
    let file = site_file("{lat: nope");
    cmd()
        .args(["analyze", "--site"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(contains("JSON error"));
}

#[test]
fn completions_bash() {
    cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(contains("site-checks"));
}
