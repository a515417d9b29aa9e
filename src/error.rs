use thiserror::Error;

/// Failures while pulling a remote resource.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered, but not with a success status. The body has already been logged.
    #[error("{status} {reason}")]
    Status { status: u16, reason: String },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
