//! AdGuard metadata header (`!` comment lines) for the generated list.

use chrono::{DateTime, Utc};

/// Number of lines [`render_header`] always returns.
pub const HEADER_LINES: usize = 11;

/// `Last modified` stamp, e.g. `2024-03-01 06:00:00 UTC`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Renders the fixed header block with `version` and `now` embedded verbatim.
pub fn render_header(version: &str, now: DateTime<Utc>) -> Vec<String> {
    let timestamp = now.format(TIMESTAMP_FORMAT);
    vec![
        "! Title: DuckDuckGo Tracker Blocklist (AdGuard Format)".to_string(),
        "! Description: DuckDuckGo's App Tracking Protection blocklist converted to AdGuard format"
            .to_string(),
        "! Homepage: https://github.com/rahoolraj/duckduckgo-adguard-blocklist".to_string(),
        "! Source: https://github.com/duckduckgo/tracker-blocklists".to_string(),
        format!("! Version: {}", version),
        format!("! Last modified: {}", timestamp),
        "! Expires: 1 day".to_string(),
        "!".to_string(),
        "! This list is automatically generated from DuckDuckGo's tracker blocklist.".to_string(),
        "! It contains domains that should be blocked to prevent app tracking.".to_string(),
        "!".to_string(),
    ]
}
