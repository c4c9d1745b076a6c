use thiserror::Error;

/// Why the clause list could not be loaded.
///
/// Every variant is a hard failure: an unusable response is never reported
/// as an empty clause list.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    #[error("invalid JSON response from server: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid data structure received: expected an array under `{key}`")]
    Shape { key: String },

    #[error("invalid clause record at index {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("no clauses received from server")]
    Empty,
}
