//! Static snapshot of every trail to **SVG** or **PNG**.
//!
//! Geometry only: trails as lines with point markers, hospitalization trails
//! thinner, each region in its color. Positivity grows upward, testing to the right.

use crate::models::Trail;
use crate::scale::EXTENT;
use crate::session::Session;
use crate::style::{Rgb8, RegionColors};
use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;

const MARGIN: f64 = 40.0;

/// Render the snapshot; the backend is chosen from the file extension (`.svg` or bitmap).
pub fn plot_trails<P: AsRef<Path>>(
    session: &Session,
    colors: &RegionColors,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    if session.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_trails(root, session, colors)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_trails(root, session, colors)?;
    }
    log::info!("wrote snapshot {}", out_path.display());
    Ok(())
}

fn draw_trails<DB>(root: DrawingArea<DB, Shift>, session: &Session, colors: &RegionColors) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .build_cartesian_2d(-MARGIN..EXTENT + MARGIN, -MARGIN..EXTENT + MARGIN)
        .map_err(|e| anyhow!("{:?}", e))?;

    let grid = RGBColor(220, 220, 220);
    for edge in [0.0, EXTENT] {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(edge, 0.0), (edge, EXTENT)],
                grid.stroke_width(1),
            )))
            .map_err(|e| anyhow!("{:?}", e))?;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(0.0, edge), (EXTENT, edge)],
                grid.stroke_width(1),
            )))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    for (region, series) in session.regions() {
        let Rgb8 { r, g, b } = colors.rgb(region).unwrap_or(Rgb8 { r: 99, g: 99, b: 99 });
        let color = RGBColor(r, g, b);

        for trail in Trail::ALL {
            // Overlay y grows downward; flip so high positivity is at the top.
            let pts: Vec<(f64, f64)> = trail
                .points(series)
                .iter()
                .map(|p| (p.x as f64, EXTENT - p.y as f64))
                .collect();
            if pts.is_empty() {
                continue;
            }
            let (stroke, radius) = match trail {
                Trail::Positivity => (2, 3),
                Trail::Hospitalization => (1, 2),
            };
            chart
                .draw_series(LineSeries::new(pts.clone(), color.stroke_width(stroke)))
                .map_err(|e| anyhow!("{:?}", e))?;
            chart
                .draw_series(pts.into_iter().map(|c| Circle::new(c, radius, color.filled())))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
