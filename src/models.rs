use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One region-day as served by the daily states endpoint.
///
/// Every numeric field is optional on the wire; absent, `null`, or unparsable values
/// read as zero. Cumulative counts and daily increases live side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    /// `YYYYMMDD` as an integer, e.g. `20200415`.
    #[serde(default, deserialize_with = "de_count")]
    pub date: i64,
    /// Two-letter region code; `null` or a non-string reads as empty.
    #[serde(default, deserialize_with = "de_region")]
    pub state: String,
    #[serde(default, deserialize_with = "de_count")]
    pub positive: i64,
    #[serde(default, deserialize_with = "de_count")]
    pub negative: i64,
    #[serde(default, deserialize_with = "de_count")]
    pub pending: i64,
    #[serde(default, deserialize_with = "de_count")]
    pub hospitalized: i64,
    #[serde(default, deserialize_with = "de_count")]
    pub death_increase: i64,
    #[serde(default, deserialize_with = "de_count")]
    pub hospitalized_increase: i64,
    #[serde(default, deserialize_with = "de_count")]
    pub positive_increase: i64,
    #[serde(default, deserialize_with = "de_count")]
    pub total_test_results_increase: i64,
}

impl DailyRecord {
    /// Everything that has come back from a test, plus what is still pending.
    pub fn tested(&self) -> i64 {
        self.positive.saturating_add(self.negative).saturating_add(self.pending)
    }

    /// Calendar date of the record, if `date` is a valid `YYYYMMDD`.
    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date.to_string(), "%Y%m%d").ok()
    }

    /// Daily increases carried into the popup bar charts.
    pub fn raw_delta(&self) -> RawDelta {
        RawDelta {
            tested: self.total_test_results_increase,
            dead: self.death_increase,
            positive: self.positive_increase,
            hospitalized: self.hospitalized_increase,
        }
    }
}

/// Serde helper: read a count from a JSON number, a numeric string, or `null`.
///
/// Floats are truncated; anything that does not parse becomes zero.
fn de_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number, a numeric string, or null")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(if v.is_finite() { v as i64 } else { 0 })
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
            let s = s.trim();
            Ok(s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
                .unwrap_or(0))
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
            Ok(0)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(0)
        }

        fn visit_some<D2>(self, d: D2) -> Result<Self::Value, D2::Error>
        where
            D2: serde::Deserializer<'de>,
        {
            d.deserialize_any(CountVisitor)
        }
    }

    deserializer.deserialize_any(CountVisitor)
}

/// Serde helper: read a region code from a string; anything else becomes empty.
fn de_region<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
    struct RegionVisitor;

    impl<'de> Visitor<'de> for RegionVisitor {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a region code")
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
            Ok(s.to_string())
        }

        fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
            Ok(String::new())
        }

        fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
            Ok(String::new())
        }

        fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
            Ok(String::new())
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
            Ok(String::new())
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(String::new())
        }

        fn visit_some<D2>(self, d: D2) -> Result<Self::Value, D2::Error>
        where
            D2: serde::Deserializer<'de>,
        {
            d.deserialize_any(RegionVisitor)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(String::new())
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(RegionVisitor)
}

/// A day's incremental counts for one region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDelta {
    pub tested: i64,
    pub dead: i64,
    pub positive: i64,
    pub hospitalized: i64,
}

impl RawDelta {
    pub fn get(&self, field: Field) -> i64 {
        match field {
            Field::Tested => self.tested,
            Field::Positive => self.positive,
            Field::Hospitalized => self.hospitalized,
            Field::Dead => self.dead,
        }
    }
}

/// Which daily count a bar chart series draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Tested,
    Positive,
    Hospitalized,
    Dead,
}

impl Field {
    /// Class name carried by the rendered bars.
    pub fn name(self) -> &'static str {
        match self {
            Field::Tested => "tested",
            Field::Positive => "positive",
            Field::Hospitalized => "hospitalized",
            Field::Dead => "dead",
        }
    }
}

/// A plotted position on the overlay grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Everything accumulated for one region. Index 0 is always the most recent day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionSeries {
    /// (testing rate, positivity rate)
    pub pos: VecDeque<Point>,
    /// (testing rate, hospitalization rate), only for days with hospitalizations
    pub hsp: VecDeque<Point>,
    /// One entry per qualifying day, plotted or not
    pub raw: VecDeque<RawDelta>,
}

/// The two trails drawn per region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trail {
    Positivity,
    Hospitalization,
}

impl Trail {
    pub const ALL: [Trail; 2] = [Trail::Positivity, Trail::Hospitalization];

    /// Id of the marker symbol referenced by this trail's points.
    pub fn marker(self) -> &'static str {
        match self {
            Trail::Positivity => "pos-rate",
            Trail::Hospitalization => "hsp-rate",
        }
    }

    pub fn points(self, series: &RegionSeries) -> &VecDeque<Point> {
        match self {
            Trail::Positivity => &series.pos,
            Trail::Hospitalization => &series.hsp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tested_saturates() {
        let rec = DailyRecord {
            positive: i64::MAX,
            negative: 1,
            pending: 1,
            ..Default::default()
        };
        assert_eq!(rec.tested(), i64::MAX);
    }

    #[test]
    fn state_reads_leniently() {
        let rec: DailyRecord = serde_json::from_str(r#"{"state":["NY"],"positive":"12"}"#).unwrap();
        assert_eq!(rec.state, "");
        assert_eq!(rec.positive, 12);
        let rec: DailyRecord = serde_json::from_str(r#"{"state":{"code":"NY"}}"#).unwrap();
        assert_eq!(rec.state, "");
    }
}
