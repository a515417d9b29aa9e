use crate::api::parse_daily;
use crate::models::{DailyRecord, Trail};
use crate::session::Session;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Read a locally saved copy of the daily dataset (same JSON shape as the endpoint).
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<DailyRecord>> {
    let path = path.as_ref();
    let txt = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_daily(&txt).with_context(|| format!("parse {}", path.display()))
}

/// Read a locally saved map document.
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Save every plotted point as CSV with header, most recent first per trail.
pub fn save_csv<P: AsRef<Path>>(session: &Session, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("region", "trail", "index", "x", "y"))?;
    for (region, series) in session.regions() {
        for trail in Trail::ALL {
            for (i, p) in trail.points(series).iter().enumerate() {
                wtr.serialize((region, trail.marker(), i, p.x, p.y))?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Save the whole session (points and raw deltas) as pretty JSON keyed by region.
pub fn save_json<P: AsRef<Path>>(session: &Session, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(session)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Write a generated page or SVG fragment.
pub fn save_text<P: AsRef<Path>>(text: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, text).with_context(|| format!("write {}", path.display()))
}
