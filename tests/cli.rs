use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const DATASET: &str = r#"[
  {"date": 20200402, "state": "NY", "positive": 92381, "negative": 146584, "pending": null, "hospitalized": 20817,
   "positiveIncrease": 8669, "totalTestResultsIncrease": 16286, "hospitalizedIncrease": 2449, "deathIncrease": 432},
  {"date": 20200401, "state": "NY", "positive": 83712, "negative": 137168, "pending": null, "hospitalized": 18368,
   "positiveIncrease": 7917, "totalTestResultsIncrease": 15694, "hospitalizedIncrease": 1861, "deathIncrease": 391},
  {"date": 20200401, "state": "GU", "positive": 77, "negative": 476}
]"#;

const MAP: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 959 593"><path id="NY" d="M0 0"/></svg>"#;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("trails").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("trails"));
}

#[test]
fn build_offline_writes_page_and_exports() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("daily.json");
    let map = dir.path().join("map.svg");
    let page = dir.path().join("page.html");
    let csv = dir.path().join("points.csv");
    fs::write(&data, DATASET).unwrap();
    fs::write(&map, MAP).unwrap();

    let mut cmd = Command::cargo_bin("trails").unwrap();
    cmd.arg("build")
        .arg("--dataset-file")
        .arg(&data)
        .arg("--map-file")
        .arg(&map)
        .arg("--out")
        .arg(&page)
        .arg("--csv")
        .arg(&csv)
        .arg("--stats");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("NY  days=2 pos=2 hsp=2"))
        .stdout(predicate::str::contains("peak_positive=8,669"));

    let html = fs::read_to_string(&page).unwrap();
    assert!(html.contains(r#"<g class="trail NY">"#));
    assert!(html.contains(r#"<path id="NY" d="M0 0"/>"#));
    assert!(!html.contains("GU"));
    assert!(fs::read_to_string(&csv).unwrap().lines().count() == 5);
}

#[test]
fn popup_prints_both_charts() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("daily.json");
    fs::write(&data, DATASET).unwrap();

    let mut cmd = Command::cargo_bin("trails").unwrap();
    cmd.args(["popup", "--region", "ny", "--dataset-file"]).arg(&data);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#"<div class="stateLabel">NY</div>"#))
        .stdout(predicate::str::contains(r#"<rect class="dead""#))
        .stdout(predicate::str::contains(">8669</text>"));

    let mut cmd = Command::cargo_bin("trails").unwrap();
    cmd.args(["popup", "--region", "GU", "--dataset-file"]).arg(&data);
    cmd.assert().failure().stderr(predicate::str::contains("no data for region GU"));
}

#[test]
fn replay_reports_final_state() {
    let mut cmd = Command::cargo_bin("trails").unwrap();
    cmd.args(["replay", "--events", "select:NY,deselect,wait:1000,select:NY,wait:3000"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("final: highlighted=NY showing=true popups_built=1"));

    let mut cmd = Command::cargo_bin("trails").unwrap();
    cmd.args(["replay", "--events", "select:NY,deselect,wait:2000"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("final: highlighted=- showing=false"));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn build_online() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("trails").unwrap();
    cmd.arg("build").arg("--out").arg(dir.path().join("page.html"));
    cmd.assert().success();
}
