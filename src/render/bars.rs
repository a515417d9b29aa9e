//! Popup bar charts of daily deltas.
//!
//! Two fields share a baseline at y = 0. A negative height budget draws bars upward
//! (SVG y grows downward), a positive one draws them below the baseline. The most
//! recent day sits at the right edge, 400px wide in total.

use super::markup::{num, text};
use crate::models::{Field, RawDelta};

/// Width of the chart area in pixels.
pub const CHART_WIDTH: i64 = 400;
/// Upper popup chart: tests vs. positives, drawn upward.
pub const UPPER: (f64, [Field; 2]) = (-300.0, [Field::Tested, Field::Positive]);
/// Lower popup chart: hospitalizations vs. deaths, drawn downward.
pub const LOWER: (f64, [Field; 2]) = (100.0, [Field::Hospitalized, Field::Dead]);

/// Horizontal step per day: `max(min(floor(400 / n), 9) - 2, 2)`.
pub fn cell_width(n: usize) -> i64 {
    let per_day = if n == 0 { i64::MAX } else { CHART_WIDTH / n as i64 };
    (per_day.min(9) - 2).max(2)
}

/// Render bars for every field and a peak label per field.
///
/// All bars are scaled against the largest value across *all* fields, so the two
/// series stay comparable. Returns an empty string when that maximum is zero.
pub fn bar_chart(data: &[RawDelta], height: f64, fields: &[Field]) -> String {
    let max_value = fields
        .iter()
        .filter_map(|&f| data.iter().map(|d| d.get(f)).max())
        .fold(0, i64::max);
    if max_value == 0 {
        return String::new();
    }

    let cell = cell_width(data.len());
    let bar_width = (cell - 2).max(2);
    let scaled = |v: i64| height * v as f64 / max_value as f64;
    let mut out = String::new();

    for &field in fields {
        for (i, d) in data.iter().enumerate() {
            let h = scaled(d.get(field));
            out.push_str(&format!(
                r#"<rect class="{}" x="{}" y="{}" width="{}" height="{}" />"#,
                field.name(),
                CHART_WIDTH - (i as i64 + 1) * cell,
                num(h.min(0.0)),
                bar_width,
                num(h.abs()),
            ));
        }
    }

    for &field in fields {
        let Some(field_max) = data.iter().map(|d| d.get(field)).max() else {
            continue;
        };
        if field_max == 0 {
            continue;
        }
        // Only the most recent occurrence of the peak is labeled.
        if let Some(i) = data.iter().position(|d| d.get(field) == field_max) {
            let x = (CHART_WIDTH - i as i64 * cell) as f64 - (cell + 2) as f64 / 2.0;
            out.push_str(&text(num(x), num(scaled(field_max)), &field_max.to_string()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tested(v: i64) -> RawDelta {
        RawDelta {
            tested: v,
            ..Default::default()
        }
    }

    #[test]
    fn cell_width_bounds() {
        assert_eq!(cell_width(0), 7);
        assert_eq!(cell_width(10), 7);
        assert_eq!(cell_width(100), 2);
        assert_eq!(cell_width(1000), 2);
        assert_eq!(cell_width(60), 4);
    }

    #[test]
    fn all_zero_renders_nothing() {
        let data = [tested(0), tested(0)];
        assert_eq!(bar_chart(&data, -300.0, &[Field::Tested, Field::Positive]), "");
        assert_eq!(bar_chart(&[], 100.0, &[Field::Dead]), "");
    }

    #[test]
    fn bars_run_right_to_left() {
        let data = [tested(10), tested(5)];
        let got = bar_chart(&data, -300.0, &[Field::Tested]);
        assert!(got.starts_with(
            r#"<rect class="tested" x="393" y="-300" width="5" height="300" /><rect class="tested" x="386" y="-150" width="5" height="150" />"#
        ));
        assert!(got.ends_with(r#"<text x="395.5" y="-300">10</text>"#));
    }
}
