//! Markup generation for the overlay, the popups, and the page, plus static snapshots.
//!
//! - `trail`: per-region markers, polylines and labels
//! - `bars`: two-field bar charts of daily deltas
//! - `css`: per-region color rules
//! - `map`: boundary map document handling
//! - `page`: the assembled HTML page
//! - `snapshot`: SVG/PNG rendering through plotters

pub mod bars;
pub mod css;
pub mod map;
pub mod markup;
pub mod page;
pub mod snapshot;
pub mod trail;

pub use bars::bar_chart;
pub use page::render_page;
pub use snapshot::plot_trails;
pub use trail::{markers, overlay, region_group};
