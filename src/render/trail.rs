//! Trail markup: markers, a connecting polyline, and a region label.

use super::markup::text;
use crate::models::{Point, RegionSeries, Trail};
use crate::session::Session;

/// Render one trail.
///
/// Emits a `<use>` per point referencing `#marker`, a polyline through the points in
/// sequence order, and a label at the last point (the earliest day). An empty
/// sequence renders as an empty string.
pub fn markers<'a, I>(points: I, marker: &str, region: &str) -> String
where
    I: IntoIterator<Item = &'a Point>,
{
    let pts: Vec<&Point> = points.into_iter().collect();
    let Some(last) = pts.last() else {
        return String::new();
    };

    let mut out = String::new();
    for p in &pts {
        out.push_str(&format!(r##"<use href="#{marker}" x="{}" y="{}" />"##, p.x, p.y));
    }
    let line = pts
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&format!(r#"<polyline fill="none" points="{line}" />"#));
    out.push_str(&text(last.x, last.y, region));
    out
}

/// Class attribute of a region's trail group.
pub fn trail_class(region: &str, highlighted: bool) -> String {
    if highlighted {
        format!("trail {region} hilite")
    } else {
        format!("trail {region}")
    }
}

/// Both trails of a region wrapped in a group addressable by class.
pub fn region_group(region: &str, series: &RegionSeries, highlighted: bool) -> String {
    let mut out = format!(r#"<g class="{}">"#, trail_class(region, highlighted));
    for trail in Trail::ALL {
        out.push_str(&markers(trail.points(series), trail.marker(), region));
    }
    out.push_str("</g>");
    out
}

/// Overlay content for every region in the session, in region-code order.
pub fn overlay(session: &Session, highlighted: Option<&str>) -> String {
    session
        .regions()
        .map(|(region, series)| region_group(region, series, highlighted == Some(region)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_trail_renders_nothing() {
        let none: [Point; 0] = [];
        assert_eq!(markers(&none, "pos-rate", "NY"), "");
    }

    #[test]
    fn label_sits_on_last_point() {
        let pts = [Point::new(600, 250), Point::new(400, 300)];
        let got = markers(&pts, "pos-rate", "NY");
        assert_eq!(
            got,
            concat!(
                r##"<use href="#pos-rate" x="600" y="250" />"##,
                r##"<use href="#pos-rate" x="400" y="300" />"##,
                r#"<polyline fill="none" points="600,250 400,300" />"#,
                r#"<text x="400" y="300">NY</text>"#,
            )
        );
    }

    #[test]
    fn group_skips_empty_hospitalization_trail() {
        let mut s = RegionSeries::default();
        s.pos.push_front(Point::new(10, 20));
        let g = region_group("WA", &s, false);
        assert!(g.starts_with(r#"<g class="trail WA">"#));
        assert!(g.ends_with("</g>"));
        assert!(!g.contains("hsp-rate"));
        assert_eq!(g.matches("<polyline").count(), 1);
    }
}
