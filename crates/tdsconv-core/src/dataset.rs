//! In-memory view of the upstream tracker data set (`android-tds.json`).
//!
//! Only `version` and `trackers.<domain>.default` are read. Anything missing or of the
//! wrong JSON type degrades to "absent" rather than failing the parse.

use serde_json::Value;
use std::collections::BTreeMap;

/// Placeholder used when the document carries no usable `version`.
pub const UNKNOWN_VERSION: &str = "unknown";

/// One value of the `trackers` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerEntry {
    /// Recommended action (`"block"`, `"ignore"`, ...), if present and a string.
    pub default: Option<String>,
}

impl TrackerEntry {
    fn from_value(value: &Value) -> Self {
        let default = value
            .get("default")
            .and_then(Value::as_str)
            .map(str::to_owned);
        Self { default }
    }
}

/// Parsed data set. Keys are held in a `BTreeMap`, so iteration is byte-wise ascending.
#[derive(Debug, Clone, Default)]
pub struct TrackerDataset {
    pub version: Option<Value>,
    pub trackers: BTreeMap<String, TrackerEntry>,
}

impl TrackerDataset {
    /// Build from a generic JSON document. Never fails.
    pub fn from_value(doc: &Value) -> Self {
        let version = doc.get("version").cloned();
        let trackers: BTreeMap<String, TrackerEntry> = doc
            .get("trackers")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .map(|(domain, entry)| (domain.clone(), TrackerEntry::from_value(entry)))
                    .collect()
            })
            .unwrap_or_default();
        Self { version, trackers }
    }

    /// Version as written to the header and the version file.
    ///
    /// Strings are taken verbatim. Booleans and an explicit `null` are spelled
    /// `True`/`False`/`None`; numbers, arrays and objects use their compact JSON text.
    pub fn version_string(&self) -> String {
        match &self.version {
            None => UNKNOWN_VERSION.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Bool(true)) => "True".to_string(),
            Some(Value::Bool(false)) => "False".to_string(),
            Some(Value::Null) => "None".to_string(),
            Some(other) => other.to_string(),
        }
    }
}
