use covid_trails::render::render_page;
use covid_trails::{DailyRecord, Populations, RegionColors, Session};

const MAP: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="959" height="593" viewBox="0 0 959 593">
<path id="NY" d="M 10 10 L 20 20"/><path id="HI-" d="M 1 1"/>
</svg>"#;

fn session() -> Session {
    let recs = vec![
        DailyRecord {
            date: 20200401,
            state: "NY".into(),
            positive: 50_000,
            negative: 150_000,
            hospitalized: 10_000,
            positive_increase: 8_000,
            total_test_results_increase: 20_000,
            hospitalized_increase: 900,
            death_increase: 700,
            ..Default::default()
        },
        DailyRecord {
            date: 20200401,
            state: "PR".into(),
            positive: 500,
            negative: 1_500,
            ..Default::default()
        },
    ];
    Session::from_records(&recs, &Populations::default())
}

#[test]
fn page_contains_map_overlay_rules_and_popups() {
    let session = session();
    let colors = RegionColors::from_json_str(r#"{"NY": "AA3300", "HI": "0033AA"}"#).unwrap();
    let page = render_page(&session, &colors, Some(MAP)).unwrap();

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains(r#"<svg class="map" viewBox="0 0 959 593">"#));
    assert!(page.contains(r#"<path id="NY" d="M 10 10 L 20 20"/>"#));
    assert!(!page.contains("<?xml"));
    assert!(page.contains(r#"<g class="trail NY">"#));
    assert!(page.contains(r#"<symbol id="pos-rate""#));
    assert!(page.contains(".pane>svg.data .NY { stroke: #AA3300; }"));
    assert!(page.contains(".pane>svg.map path#HI, .pane>svg.map path#HI- { fill: #0033AA !important; }"));
    assert!(page.contains(r#"<section class="popup" id="popup-NY">"#));
    assert!(page.contains(r#"<div class="stateLabel">NY</div>"#));
    // Map paths with data open their popup; the targeted region's trail is highlighted.
    assert!(page.contains(r##"<a href="#popup-NY"><path id="NY" d="M 10 10 L 20 20"/></a>"##));
    assert!(!page.contains(r##"<a href="#popup-HI">"##));
    assert!(page.contains("body:has(#popup-NY:target) .pane>svg.data g.trail.NY"));
    // Regions without a population never reach the page.
    assert!(!page.contains("trail PR"));
}

#[test]
fn page_without_map_still_renders_overlay() {
    let session = session();
    let page = render_page(&session, &RegionColors::default(), None).unwrap();
    assert!(page.contains(r#"<svg class="map" viewBox="0 0 959 593"></svg>"#));
    assert!(page.contains(r#"<g class="trail NY">"#));
}

#[test]
fn broken_map_is_an_error() {
    let session = session();
    assert!(render_page(&session, &RegionColors::default(), Some("<html></html>")).is_err());
}
