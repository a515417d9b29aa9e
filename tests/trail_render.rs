use covid_trails::highlight::parse_trail_class;
use covid_trails::render::{markers, overlay, region_group};
use covid_trails::{Point, RegionSeries, Session};
use std::collections::BTreeMap;

fn series(pos: &[(i32, i32)], hsp: &[(i32, i32)]) -> RegionSeries {
    RegionSeries {
        pos: pos.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        hsp: hsp.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        raw: Default::default(),
    }
}

#[test]
fn empty_sequence_renders_no_marker_line_or_label() {
    let s = series(&[], &[]);
    assert_eq!(markers(&s.pos, "pos-rate", "NY"), "");
    assert_eq!(region_group("NY", &s, false), r#"<g class="trail NY"></g>"#);
}

#[test]
fn both_trails_share_one_group() {
    let s = series(&[(500, 200), (450, 210)], &[(500, 600)]);
    let g = region_group("CA", &s, false);
    assert_eq!(g.matches(r##"<use href="#pos-rate""##).count(), 2);
    assert_eq!(g.matches(r##"<use href="#hsp-rate""##).count(), 1);
    assert_eq!(g.matches("<polyline").count(), 2);
    assert!(g.contains(r#"<text x="450" y="210">CA</text>"#));
    assert!(g.contains(r#"<text x="500" y="600">CA</text>"#));
    // Positivity trail precedes the hospitalization trail.
    assert!(g.find("pos-rate").unwrap() < g.find("hsp-rate").unwrap());
}

#[test]
fn overlay_orders_groups_and_marks_highlight() {
    let mut all = BTreeMap::new();
    all.insert("WA".to_string(), series(&[(1, 1)], &[]));
    all.insert("CA".to_string(), series(&[(2, 2)], &[]));
    let session = Session::from_series(all);

    let out = overlay(&session, Some("WA"));
    let ca = out.find(r#"<g class="trail CA">"#).unwrap();
    let wa = out.find(r#"<g class="trail WA hilite">"#).unwrap();
    assert!(ca < wa);
    assert_eq!(parse_trail_class("trail WA hilite"), Some(("WA", true)));
}
