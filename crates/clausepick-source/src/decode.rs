//! Validation of the clause list response body.

use clausepick_core::{ClauseDataset, ClauseRecord};
use serde::Deserialize;
use serde_json::Value;

use crate::DataLoadError;

/// Key holding the record array in the response object.
pub const DEFAULT_DATA_KEY: &str = "data";

/// Decode a response body of the form `{"<key>": [[id, category, abbr, desc], ...]}`.
///
/// Checks, in order: the body is JSON, it is an object with an array under
/// `key`, every element is a 4-cell record, and the array is non-empty.
pub fn decode_body(body: &str, key: &str) -> Result<ClauseDataset, DataLoadError> {
    let value: Value = serde_json::from_str(body)?;
    let Some(Value::Array(items)) = value.get(key) else {
        return Err(DataLoadError::Shape {
            key: key.to_string(),
        });
    };

    let records = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            ClauseRecord::deserialize(item).map_err(|source| DataLoadError::Record { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if records.is_empty() {
        return Err(DataLoadError::Empty);
    }
    Ok(ClauseDataset::new(records))
}
