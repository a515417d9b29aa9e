//! covid_trails
//!
//! Fetch per-state daily testing data, place every region-day on a pair of log
//! scales (tests per million vs. positivity / hospitalization rate), and render
//! the resulting trails as SVG markup over a region map. Pairs with the `trails` CLI.
//!
//! ### Features
//! - Blocking fetch of the daily dataset and the boundary map
//! - Log-scale transform into per-region trails and raw daily deltas
//! - Trail overlay, popup bar charts, and a self-contained HTML page
//! - Highlight state machine for hover/click selection with a fade-out delay
//! - CSV/JSON export, per-region summaries, SVG/PNG snapshots
//!
//! ### Example
//! ```no_run
//! use covid_trails::{Client, Config, Populations, RegionColors, Session};
//!
//! let client = Client::new(&Config::default())?;
//! let records = client.fetch_daily()?;
//! let map = client.fetch_map()?;
//! let session = Session::from_records(&records, &Populations::default());
//! let colors = RegionColors::for_regions(session.regions().map(|(r, _)| r));
//! let page = covid_trails::render::render_page(&session, &colors, Some(&map))?;
//! covid_trails::storage::save_text(&page, "trails.html")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod highlight;
pub mod models;
pub mod population;
pub mod render;
pub mod scale;
pub mod session;
pub mod stats;
pub mod storage;
pub mod style;

pub use api::Client;
pub use config::Config;
pub use error::FetchError;
pub use models::{DailyRecord, Field, Point, RawDelta, RegionSeries};
pub use population::Populations;
pub use scale::LogScale;
pub use session::{Popup, Session};
pub use style::RegionColors;
