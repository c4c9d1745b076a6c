//! Loading the clause list: the source trait, response validation and the
//! HTTP implementation.

mod decode;
mod error;

pub use decode::{DEFAULT_DATA_KEY, decode_body};
pub use error::DataLoadError;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::{DEFAULT_ENDPOINT, HttpClauseSource};

use async_trait::async_trait;
use clausepick_core::ClauseDataset;

/// Anything that can produce the clause list.
///
/// Called once at startup and again only on a manual retry.
#[async_trait]
pub trait ClauseSource: Send + Sync {
    async fn load(&self) -> Result<ClauseDataset, DataLoadError>;
}
