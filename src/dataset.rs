use crate::models::{DailyRecord, Point, RegionSeries};
use crate::population::Populations;
use crate::scale::LogScale;
use std::collections::BTreeMap;

/// Tests per million population feed the horizontal scale.
const PER_MILLION: f64 = 1_000_000.0;

/// Fold daily records into per-region series.
///
/// Records are expected oldest-first; every entry is prepended, so index 0 of each
/// resulting sequence is the most recent day. A record only counts when it has
/// positives and a known population. Such a record always contributes a raw delta,
/// but only contributes points when its testing coordinate is on the grid (`>= 0`).
pub fn transform(records: &[DailyRecord], populations: &Populations) -> BTreeMap<String, RegionSeries> {
    let vertical = LogScale::vertical();
    let horizontal = LogScale::horizontal();
    let mut all: BTreeMap<String, RegionSeries> = BTreeMap::new();
    let mut skipped = 0usize;

    for rec in records {
        let Some(population) = populations.get(&rec.state).filter(|_| rec.positive != 0) else {
            skipped += 1;
            continue;
        };
        let tested = rec.tested();
        let series = all.entry(rec.state.clone()).or_default();
        series.raw.push_front(rec.raw_delta());

        let rate = match horizontal.apply(PER_MILLION * tested as f64 / population as f64) {
            Some(rate) if rate >= 0 => rate,
            _ => continue,
        };
        let Some(y) = vertical.apply(rec.positive as f64 / tested as f64) else {
            continue;
        };
        series.pos.push_front(Point::new(rate, y));

        if rec.hospitalized != 0
            && let Some(y) = vertical.apply(rec.hospitalized as f64 / tested as f64)
        {
            series.hsp.push_front(Point::new(rate, y));
        }
    }

    log::debug!(
        "transformed {} records into {} regions ({} skipped)",
        records.len(),
        all.len(),
        skipped
    );
    all
}
