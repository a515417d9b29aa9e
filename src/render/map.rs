//! Handling of the region boundary map document.

use anyhow::{Result, anyhow};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

fn region_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Z]{2})-?$").expect("valid region id regex"))
}

fn id_attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\bid\s*=\s*["']([^"']*)["']"#).expect("valid id attribute regex"))
}

fn svg_open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<svg\b[^>]*>").expect("valid svg tag regex"))
}

fn path_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<path\b[^>]*?(?:/>|>.*?</path>)").expect("valid path element regex"))
}

/// Region code for a map element id: `NY` or `NY-` yield `NY`, anything else `None`.
pub fn region_from_map_id(id: &str) -> Option<&str> {
    region_id_re()
        .captures(id)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Markup between the root `<svg ...>` tag and its closing tag.
pub fn inner_markup(svg: &str) -> Result<&str> {
    let open = svg_open_re()
        .find(svg)
        .ok_or_else(|| anyhow!("map document has no <svg> root"))?;
    if open.as_str().ends_with("/>") {
        return Ok("");
    }
    let close = svg
        .rfind("</svg>")
        .filter(|&c| c >= open.end())
        .ok_or_else(|| anyhow!("map document has no closing </svg>"))?;
    Ok(&svg[open.end()..close])
}

/// `viewBox` attribute of the root element, if any.
pub fn view_box(svg: &str) -> Option<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r#"\bviewBox\s*=\s*["']([^"']*)["']"#).expect("valid viewBox regex"));
    let open = svg_open_re().find(svg)?;
    re.captures(open.as_str())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Wrap each region path for which `linked` holds in a link to its popup fragment.
pub fn link_regions(inner: &str, linked: impl Fn(&str) -> bool) -> String {
    path_re()
        .replace_all(inner, |caps: &regex::Captures| {
            let path = &caps[0];
            let open_tag = path.split_once('>').map_or(path, |(tag, _)| tag);
            let region = id_attr_re()
                .captures(open_tag)
                .and_then(|c| c.get(1))
                .and_then(|m| region_from_map_id(m.as_str()))
                .filter(|r| linked(*r));
            match region {
                Some(r) => format!(r##"<a href="#popup-{r}">{path}</a>"##),
                None => path.to_string(),
            }
        })
        .into_owned()
}

/// Every region code the map carries as an element id.
pub fn region_ids(svg: &str) -> BTreeSet<String> {
    id_attr_re()
        .captures_iter(svg)
        .filter_map(|c| c.get(1))
        .filter_map(|m| region_from_map_id(m.as_str()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = r#"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 959 593"><path id="NY" d="M0 0"/><path id="MI-" d="M1 1"/><g id="Labels"/></svg>"#;

    #[test]
    fn map_ids() {
        assert_eq!(region_from_map_id("NY"), Some("NY"));
        assert_eq!(region_from_map_id("MI-"), Some("MI"));
        assert_eq!(region_from_map_id("NY--"), None);
        assert_eq!(region_from_map_id("ny"), None);
        assert_eq!(region_from_map_id("Labels"), None);
    }

    #[test]
    fn inner_markup_strips_root() {
        let inner = inner_markup(MAP).unwrap();
        assert!(inner.starts_with(r#"<path id="NY""#));
        assert!(inner.ends_with(r#"<g id="Labels"/>"#));
        assert!(inner_markup("<html/>").is_err());
        assert_eq!(view_box(MAP), Some("0 0 959 593"));
    }

    #[test]
    fn links_only_regions_with_data() {
        let inner = inner_markup(MAP).unwrap();
        let linked = link_regions(inner, |r| r == "MI");
        assert!(linked.contains(r##"<a href="#popup-MI"><path id="MI-" d="M1 1"/></a>"##));
        assert!(linked.contains(r#"<path id="NY" d="M0 0"/><a"#));
        assert!(linked.ends_with(r#"<g id="Labels"/>"#));

        let open = link_regions(r#"<path d="M2 2" id="NY"><title>New York</title></path>"#, |_| true);
        assert_eq!(
            open,
            r##"<a href="#popup-NY"><path d="M2 2" id="NY"><title>New York</title></path></a>"##
        );
    }

    #[test]
    fn collects_region_ids() {
        let ids: Vec<String> = region_ids(MAP).into_iter().collect();
        assert_eq!(ids, vec!["MI".to_string(), "NY".to_string()]);
    }
}
