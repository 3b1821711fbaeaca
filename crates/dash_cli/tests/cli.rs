//! Binary-level checks: exit codes and written exports.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const FIXTURE: &str = include_str!("../../../fixtures/analysis.json");

fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data/analysis.json"), FIXTURE).unwrap();
    dir
}

fn dash(source: &Path, out: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dash").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--quiet")
        .arg("--source")
        .arg(source)
        .arg("--out")
        .arg(out);
    cmd
}

#[test]
fn renders_html_dashboard() {
    let site = site();
    let out = site.path().join("public/index.html");
    dash(site.path(), &out).assert().success();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<b id=\"kpiTotalA\">1.234.567</b>"));
    assert!(html.contains("<select id=\"scenario\">"));
    assert!(html.contains("data-scenario=\"C_conservador\" hidden"));
    assert!(html.contains("id=\"chartDailyVolume\""));
    assert!(html.contains("Plotly.newPlot"));
}

#[test]
fn writes_json_next_to_html() {
    let site = site();
    let out = site.path().join("index.html");
    dash(site.path(), &out)
        .args(["--render", "html", "json", "--scenario", "B_remove_padrao_nome_sobrenome_3dig_gmail"])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(site.path().join("index.json")).unwrap()).unwrap();
    assert_eq!(json["selects"]["scenario"]["selected"], "B_remove_padrao_nome_sobrenome_3dig_gmail");
    assert_eq!(json["tables"]["rankingTable"].as_array().unwrap().len(), 4);
    assert_eq!(json["rankings"].as_array().unwrap().len(), 3);
}

#[test]
fn missing_report_exits_3_with_notice_page() {
    let empty = tempfile::tempdir().unwrap();
    let out = empty.path().join("index.html");
    dash(empty.path(), &out).assert().code(3);

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("role=\"alert\""));
    assert!(!html.contains("kpiTotalA"));
}

#[test]
fn unwritable_notice_page_keeps_load_exit_code() {
    let empty = tempfile::tempdir().unwrap();
    let blocker = empty.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    dash(empty.path(), &blocker.join("index.html")).assert().code(3);
}

#[test]
fn validate_only_writes_nothing() {
    let site = site();
    let out = site.path().join("index.html");
    dash(site.path(), &out).arg("--validate-only").assert().success();
    assert!(!out.exists());
}

#[test]
fn validate_only_fails_on_findings() {
    let site = site();
    let mut report: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
    report["daily"][0]["mario_share"] = serde_json::json!(1.5);
    fs::write(site.path().join("data/analysis.json"), report.to_string()).unwrap();
    let out = site.path().join("index.html");
    dash(site.path(), &out).arg("--validate-only").assert().code(2);
}

#[test]
fn unknown_scenario_is_a_validation_error() {
    let site = site();
    let out = site.path().join("index.html");
    dash(site.path(), &out).args(["--scenario", "Z_inexistente"]).assert().code(2);
}

#[test]
fn non_http_scheme_is_rejected() {
    Command::cargo_bin("dash")
        .unwrap()
        .args(["--source", "ftp://example.org/site"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("source must be a directory or http(s) URL"));
}
