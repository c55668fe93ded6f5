//! Decode a response body into a TrackerDataset.

use crate::dataset::TrackerDataset;
use crate::error::FetchError;
use serde_json::Value;

/// UTF-8 decode then JSON parse. Shape problems inside a valid document are not errors.
pub fn parse_body(body: Vec<u8>) -> Result<TrackerDataset, FetchError> {
    let text = String::from_utf8(body)?;
    let doc: Value = serde_json::from_str(&text)?;
    Ok(TrackerDataset::from_value(&doc))
}
