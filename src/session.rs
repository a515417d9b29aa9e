//! Session state: the per-region series built once after the dataset load and only
//! read afterwards by the renderers and the highlight controller.

use crate::dataset;
use crate::models::{DailyRecord, RawDelta, RegionSeries};
use crate::population::Populations;
use crate::render::bars::{LOWER, UPPER, bar_chart};
use crate::render::markup::escape;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Session {
    series: BTreeMap<String, RegionSeries>,
}

/// Content of the hover/click popup for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub label: String,
    /// Tests vs. positives.
    pub upper: String,
    /// Hospitalizations vs. deaths.
    pub lower: String,
}

impl Popup {
    /// The three popup regions as one fragment, each in its own element.
    pub fn to_markup(&self) -> String {
        format!(
            r#"<div class="stateLabel">{}</div><svg class="upper">{}</svg><svg class="lower">{}</svg>"#,
            escape(&self.label),
            self.upper,
            self.lower
        )
    }
}

impl Session {
    pub fn from_records(records: &[DailyRecord], populations: &Populations) -> Self {
        Self {
            series: dataset::transform(records, populations),
        }
    }

    pub fn from_series(series: BTreeMap<String, RegionSeries>) -> Self {
        Self { series }
    }

    pub fn get(&self, region: &str) -> Option<&RegionSeries> {
        self.series.get(region)
    }

    /// Regions in code order.
    pub fn regions(&self) -> impl Iterator<Item = (&str, &RegionSeries)> {
        self.series.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Popup for `region`, or `None` when the session holds no data for it.
    pub fn popup(&self, region: &str) -> Option<Popup> {
        let series = self.series.get(region)?;
        let raw: Vec<RawDelta> = series.raw.iter().copied().collect();
        Some(Popup {
            label: region.to_string(),
            upper: bar_chart(&raw, UPPER.0, &UPPER.1),
            lower: bar_chart(&raw, LOWER.0, &LOWER.1),
        })
    }
}
