//! Error types for the conversion pipeline.
//!
//! Both kinds are fatal to a run. Messages name only their own layer; the underlying
//! cause is exposed through `source()`, so `{:#}` in anyhow prints the full chain.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a parsed dataset from the source URL.
#[derive(Error, Debug)]
pub enum FetchError {
    /// URL did not parse, or its scheme is not http/https.
    #[error("invalid source URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Curl reported an error (DNS, connect, TLS, timeout, ...).
    #[error("GET {url} failed")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Response completed with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },

    /// Body is not valid UTF-8.
    #[error("response body is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Body is not valid JSON.
    #[error("response body is not valid JSON")]
    Json(#[from] serde_json::Error),
}

/// Failure to write one of the output files.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to create {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to rename {} to {}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error for one run of the pipeline.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("fetch failed")]
    Fetch(#[from] FetchError),

    #[error("write failed")]
    Write(#[from] WriteError),
}
