//! Self-contained HTML page: map pane, trail overlay, per-region popups.
//!
//! The page needs no script. Each region's popup is pre-rendered and revealed
//! through its fragment id (`#popup-NY`), linked from the region index and from
//! the region's map path. The targeted region's trail is drawn highlighted.

use super::css::region_rules;
use super::map::{inner_markup, link_regions, view_box};
use super::markup::escape;
use super::trail::overlay;
use crate::session::Session;
use crate::style::RegionColors;
use anyhow::Result;

const DEFAULT_MAP_VIEW_BOX: &str = "0 0 959 593";
/// The overlay grid plus a margin for labels that sit on its edge.
const DATA_VIEW_BOX: &str = "-40 -40 1080 1080";

const BASE_CSS: &str = r#"
body { font-family: sans-serif; margin: 0; }
.pane { position: relative; width: 960px; height: 600px; }
.pane>svg { position: absolute; left: 0; top: 0; width: 100%; height: 100%; }
.pane>svg.map path { fill: #ddd; stroke: #fff; }
.pane>svg.data { pointer-events: none; }
.pane>svg.data g.trail { stroke-width: 2; opacity: 0.6; }
.pane>svg.data polyline { fill: none; }
.pane>svg.data text { stroke: none; font-size: 18px; }
.popup { display: none; }
.popup:target { display: block; }
.popup svg { width: 400px; overflow: visible; }
.popup svg.upper { height: 300px; }
.popup svg.lower { height: 100px; }
.popup rect.tested { fill: #9ab; }
.popup rect.positive { fill: #c33; }
.popup rect.hospitalized { fill: #e93; }
.popup rect.dead { fill: #333; }
"#;

const MARKER_DEFS: &str = r#"<defs><symbol id="pos-rate" overflow="visible"><circle r="5" /></symbol><symbol id="hsp-rate" overflow="visible"><rect x="-4" y="-4" width="8" height="8" /></symbol></defs>"#;

/// Assemble the page. `map_svg` is the full boundary map document, if one was loaded.
pub fn render_page(session: &Session, colors: &RegionColors, map_svg: Option<&str>) -> Result<String> {
    let (map_view_box, map_inner) = match map_svg {
        Some(svg) => (
            view_box(svg).unwrap_or(DEFAULT_MAP_VIEW_BOX),
            link_regions(inner_markup(svg)?, |r| session.get(r).is_some()),
        ),
        None => (DEFAULT_MAP_VIEW_BOX, String::new()),
    };

    let index: String = session
        .regions()
        .map(|(r, _)| format!(r##"<a href="#popup-{r}">{r}</a> "##, r = escape(r)))
        .collect();
    let popups: String = session
        .regions()
        .filter_map(|(r, _)| session.popup(r))
        .map(|p| {
            format!(
                r#"<section class="popup" id="popup-{}">{}</section>"#,
                escape(&p.label),
                p.to_markup()
            )
        })
        .collect();

    let mut hilite: Vec<String> = vec![".pane>svg.data g.trail.hilite".to_string()];
    hilite.extend(
        session
            .regions()
            .map(|(r, _)| format!("body:has(#popup-{r}:target) .pane>svg.data g.trail.{r}", r = escape(r))),
    );
    let hilite = format!("{} {{ stroke-width: 4; opacity: 1; }}\n", hilite.join(", "));

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Testing vs. positivity trails</title>
<style>{base}{hilite}{rules}
</style>
</head>
<body>
<div class="pane">
<svg class="map" viewBox="{map_view_box}">{map_inner}</svg>
<svg class="data" viewBox="{DATA_VIEW_BOX}">{MARKER_DEFS}<g id="data">{overlay}</g></svg>
</div>
<nav class="regions">{index}</nav>
<div id="popups">{popups}</div>
</body>
</html>
"#,
        base = BASE_CSS,
        rules = region_rules(colors),
        overlay = overlay(session, None),
    ))
}
