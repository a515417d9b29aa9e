//! Runtime configuration: endpoints, timeouts, and the highlight fade delay.
//!
//! Defaults can be overridden through the environment:
//! - `TRAILS_DATASET_URL`
//! - `TRAILS_MAP_URL`
//! - `TRAILS_TIMEOUT_SECS`
//! - `TRAILS_FADE_MS`
//!
//! Command-line flags take precedence over both.

use std::time::Duration;

pub const DEFAULT_DATASET_URL: &str = "https://covidtracking.com/api/v1/states/daily.json";
pub const DEFAULT_MAP_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/2/2a/Blank_US_Map_With_Labels.svg";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub dataset_url: String,
    pub map_url: String,
    pub timeout: Duration,
    /// How long a deselected region stays highlighted before clearing.
    pub fade_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.into(),
            map_url: DEFAULT_MAP_URL.into(),
            timeout: Duration::from_secs(30),
            fade_delay: Duration::from_millis(2000),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from an arbitrary key lookup; unparsable numbers fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(url) = lookup("TRAILS_DATASET_URL").filter(|s| !s.trim().is_empty()) {
            cfg.dataset_url = url;
        }
        if let Some(url) = lookup("TRAILS_MAP_URL").filter(|s| !s.trim().is_empty()) {
            cfg.map_url = url;
        }
        if let Some(secs) = lookup("TRAILS_TIMEOUT_SECS").and_then(|s| s.trim().parse().ok()) {
            cfg.timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = lookup("TRAILS_FADE_MS").and_then(|s| s.trim().parse().ok()) {
            cfg.fade_delay = Duration::from_millis(ms);
        }
        cfg
    }
}
