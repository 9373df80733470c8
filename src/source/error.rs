//! Fetch error taxonomy.

use thiserror::Error;

/// Why the character collection could not be loaded.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("upstream {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed character payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("failed to read fixture {path}: {source}")]
    Fixture {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
