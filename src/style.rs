//! Region colors used by the overlay strokes, the map fills, and the snapshot plot.
//!
//! Design:
//! - Every known region gets a stable default hue derived from its code.
//! - A JSON object `{ "NY": "1F77B4", ... }` can override or extend the table.
//! - Colors are stored as six hex digits without the leading `#`.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Clone, Copy, Debug)]
struct Hsl {
    h_deg: f64, // 0..360
    s: f64,     // 0..1
    l: f64,     // 0..1
}

/// Region code → color table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionColors(BTreeMap<String, String>);

fn hex6() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9A-Fa-f]{6}$").expect("valid hex color regex"))
}

impl RegionColors {
    /// Stable default colors for `regions`.
    pub fn for_regions<'a>(regions: impl IntoIterator<Item = &'a str>) -> Self {
        Self(
            regions
                .into_iter()
                .map(|r| (r.to_string(), default_hex(r)))
                .collect(),
        )
    }

    /// Parse a JSON object of region → hex color. Entries that are not six hex digits
    /// (a leading `#` is tolerated) are dropped with a warning.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, String> =
            serde_json::from_str(json).context("parse color table")?;
        let mut out = BTreeMap::new();
        for (region, color) in raw {
            let color = color.trim().trim_start_matches('#');
            if hex6().is_match(color) {
                out.insert(region, color.to_string());
            } else {
                log::warn!("ignoring color {color:?} for {region}: expected six hex digits");
            }
        }
        Ok(Self(out))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let txt = std::fs::read_to_string(path)
            .with_context(|| format!("read color table {}", path.display()))?;
        Self::from_json_str(&txt)
    }

    /// Entries from `other` win over ours.
    pub fn merge(mut self, other: RegionColors) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn get(&self, region: &str) -> Option<&str> {
        self.0.get(region).map(String::as_str)
    }

    pub fn rgb(&self, region: &str) -> Option<Rgb8> {
        self.get(region).and_then(parse_hex)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Default color for a region: hashed hue at fixed saturation and lightness.
pub fn default_hex(region: &str) -> String {
    let rgb = hsl_to_rgb8(Hsl {
        h_deg: stable_hue_deg(region),
        s: 0.60,
        l: 0.45,
    });
    format!("{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

fn parse_hex(hex: &str) -> Option<Rgb8> {
    if !hex6().is_match(hex) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb8 {
        r: byte(0)?,
        g: byte(2)?,
        b: byte(4)?,
    })
}

// ------------------------ Utilities ------------------------

fn stable_hue_deg(key: &str) -> f64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    (hasher.finish() % 360) as f64
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

// HSL -> RGB conversion (linear; sufficient for chart colors)
fn hsl_to_rgb8(hsl: Hsl) -> Rgb8 {
    let h = (hsl.h_deg % 360.0) / 360.0;
    let s = clamp01(hsl.s);
    let l = clamp01(hsl.l);

    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return Rgb8 { r: v, g: v, b: v };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    Rgb8 {
        r: (hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
        g: (hue_to_rgb(p, q, h) * 255.0).round() as u8,
        b: (hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
    }
}
