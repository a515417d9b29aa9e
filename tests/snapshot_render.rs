use covid_trails::render::plot_trails;
use covid_trails::{DailyRecord, Populations, RegionColors, Session};
use std::fs;

fn session() -> Session {
    let recs: Vec<DailyRecord> = (1..=5)
        .map(|d| DailyRecord {
            date: 20200400 + d,
            state: "TX".into(),
            positive: 1_000 * d,
            negative: 20_000 * d,
            hospitalized: 100 * d,
            ..Default::default()
        })
        .collect();
    Session::from_records(&recs, &Populations::default())
}

#[test]
fn svg_snapshot_is_written() {
    let session = session();
    let colors = RegionColors::for_regions(["TX"]);
    let path = std::env::temp_dir().join("covid_trails_snapshot_test.svg");
    plot_trails(&session, &colors, &path, 600, 600).unwrap();
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("<circle"));
    fs::remove_file(&path).ok();
}

#[test]
fn empty_session_is_error() {
    let path = std::env::temp_dir().join("covid_trails_snapshot_empty.svg");
    assert!(plot_trails(&Session::default(), &RegionColors::default(), &path, 600, 600).is_err());
}
