//! Synchronous client for the two remote inputs: the daily states dataset and the
//! region boundary map.
//!
//! ### Notes
//! - Neither request is retried. A non-success status logs the response body and
//!   surfaces as [`FetchError::Status`].
//! - The dataset endpoint serves newest-first; records are re-sorted oldest-first
//!   (stable, by `date`) before they are handed out.
//!
//! Typical usage:
//! ```no_run
//! # use covid_trails::{Client, Config};
//! let client = Client::new(&Config::default())?;
//! let records = client.fetch_daily()?;
//! let map_svg = client.fetch_map()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::config::Config;
use crate::error::FetchError;
use crate::models::DailyRecord;
use anyhow::{Context, Result};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Client {
    pub dataset_url: String,
    pub map_url: String,
    http: HttpClient,
}

impl Client {
    pub fn new(cfg: &Config) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(cfg.timeout)
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("covid-trails/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;
        Ok(Self {
            dataset_url: cfg.dataset_url.clone(),
            map_url: cfg.map_url.clone(),
            http,
        })
    }

    /// GET `url` and return the body, failing on any non-success status.
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let transport = |source: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };
        log::info!("GET {url}");
        let rsp = self.http.get(url).send().map_err(transport)?;
        let status = rsp.status();
        let body = rsp.text().map_err(transport)?;
        if !status.is_success() {
            log::error!("{body}");
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        log::debug!("{} bytes from {url}", body.len());
        Ok(body)
    }

    /// Fetch every daily record, oldest first.
    pub fn fetch_daily(&self) -> Result<Vec<DailyRecord>, FetchError> {
        let body = self.get_text(&self.dataset_url)?;
        let records = parse_daily(&body).map_err(|source| FetchError::Decode {
            url: self.dataset_url.clone(),
            source,
        })?;
        log::info!("fetched {} daily records", records.len());
        Ok(records)
    }

    /// Fetch the boundary map as an SVG document string.
    pub fn fetch_map(&self) -> Result<String, FetchError> {
        self.get_text(&self.map_url)
    }
}

/// Decode a JSON array of daily records and order it oldest first.
pub fn parse_daily(json: &str) -> Result<Vec<DailyRecord>, serde_json::Error> {
    let mut records: Vec<DailyRecord> = serde_json::from_str(json)?;
    records.sort_by_key(|r| r.date);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sorts_oldest_first_and_keeps_region_order() {
        let json = r#"[
            {"date": 20200302, "state": "NY", "positive": 5},
            {"date": 20200302, "state": "CA", "positive": 7},
            {"date": 20200301, "state": "NY", "positive": 1}
        ]"#;
        let recs = parse_daily(json).unwrap();
        let order: Vec<(i64, &str)> = recs.iter().map(|r| (r.date, r.state.as_str())).collect();
        assert_eq!(order, vec![(20200301, "NY"), (20200302, "NY"), (20200302, "CA")]);
    }
}
