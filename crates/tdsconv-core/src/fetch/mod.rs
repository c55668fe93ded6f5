//! Dataset fetch over HTTP(S).
//!
//! Uses the curl crate (libcurl) for a single blocking GET with finite connect and
//! transfer timeouts, then decodes the body as UTF-8 JSON. No retries and no caching.

mod parse;

pub use parse::parse_body;

use crate::dataset::TrackerDataset;
use crate::error::FetchError;
use std::time::Duration;

/// Upstream location of DuckDuckGo's App Tracking Protection data set.
pub const SOURCE_URL: &str =
    "https://raw.githubusercontent.com/duckduckgo/tracker-blocklists/main/app/android-tds.json";

/// Network limits for the fetch.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    /// Upper bound on the whole transfer, headers and body included.
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(60),
        }
    }
}

/// GETs `url` and parses the body into a [`TrackerDataset`].
///
/// Follows redirects. Runs in the current thread and blocks until the transfer
/// finishes or a timeout fires.
pub fn fetch(url: &str, opts: FetchOptions) -> Result<TrackerDataset, FetchError> {
    validate_url(url)?;
    tracing::info!(url, "fetching tracker data set");

    let body = get(url, opts)?;
    tracing::debug!(bytes = body.len(), "response body received");

    parse_body(body)
}

/// Rejects anything that is not an absolute http/https URL before curl sees it.
fn validate_url(url: &str) -> Result<(), FetchError> {
    let parsed = url::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {:?}", other),
        }),
    }
}

fn get(url: &str, opts: FetchOptions) -> Result<Vec<u8>, FetchError> {
    let transport = |source: curl::Error| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.max_redirections(10).map_err(transport)?;
    easy.useragent(concat!("tdsconv/", env!("CARGO_PKG_VERSION")))
        .map_err(transport)?;
    easy.connect_timeout(opts.connect_timeout).map_err(transport)?;
    easy.timeout(opts.timeout).map_err(transport)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let code = easy.response_code().map_err(transport)?;
    tracing::debug!(code, "response status");
    if !(200..300).contains(&code) {
        return Err(FetchError::Status {
            url: url.to_string(),
            code,
        });
    }

    Ok(body)
}
