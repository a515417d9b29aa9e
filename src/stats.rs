use crate::models::{Point, RegionSeries};
use crate::session::Session;
use serde::{Deserialize, Serialize};

/// Summary of one region's series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub region: String,
    /// Qualifying days (raw deltas).
    pub days: usize,
    pub pos_points: usize,
    pub hsp_points: usize,
    /// Most recent positivity point, if any day made it onto the grid.
    pub latest: Option<Point>,
    pub peak_positive: Option<i64>,
    pub peak_dead: Option<i64>,
    pub total_tested: i64,
}

impl Summary {
    pub fn of(region: &str, series: &RegionSeries) -> Self {
        Self {
            region: region.to_string(),
            days: series.raw.len(),
            pos_points: series.pos.len(),
            hsp_points: series.hsp.len(),
            latest: series.pos.front().copied(),
            peak_positive: series.raw.iter().map(|d| d.positive).max(),
            peak_dead: series.raw.iter().map(|d| d.dead).max(),
            total_tested: series.raw.iter().fold(0i64, |acc, d| acc.saturating_add(d.tested)),
        }
    }
}

/// One summary per region, in region-code order.
pub fn region_summary(session: &Session) -> Vec<Summary> {
    session
        .regions()
        .map(|(region, series)| Summary::of(region, series))
        .collect()
}
