//! HTTP loader for the published clause list.

use async_trait::async_trait;
use clausepick_core::ClauseDataset;
use tracing::{info, warn};

use crate::decode::{DEFAULT_DATA_KEY, decode_body};
use crate::{ClauseSource, DataLoadError};

/// Published Apps Script endpoint serving the clause list.
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbx4Cdv-wEQ4zIkqfkJwfzswXDJFneBj-qddsCgfc8kWF50O9gW35PA5Jk6TOBpdbe3k/exec";

/// Fetches the clause list with a single GET.
pub struct HttpClauseSource {
    client: reqwest::Client,
    endpoint: String,
    data_key: String,
}

impl HttpClauseSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            data_key: DEFAULT_DATA_KEY.to_string(),
        }
    }

    /// Read the record array from `key` instead of `"data"`.
    pub fn with_data_key(mut self, key: impl Into<String>) -> Self {
        self.data_key = key.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self) -> Result<ClauseDataset, DataLoadError> {
        info!(url = %self.endpoint, "fetching clause list");
        let resp = self.client.get(&self.endpoint).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DataLoadError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let dataset = decode_body(&body, &self.data_key)?;
        info!(count = dataset.len(), "fetched clause list");
        Ok(dataset)
    }
}

#[async_trait]
impl ClauseSource for HttpClauseSource {
    async fn load(&self) -> Result<ClauseDataset, DataLoadError> {
        let result = self.fetch().await;
        if let Err(e) = &result {
            warn!(url = %self.endpoint, error = %e, "clause list load failed");
        }
        result
    }
}
