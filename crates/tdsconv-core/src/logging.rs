//! Structured logging for the converter.
//!
//! Events go to `$XDG_STATE_HOME/tdsconv/tdsconv.log` when that file can be opened and to
//! stderr otherwise. `RUST_LOG` overrides the default filter.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tdsconv=debug,tdsconv_core=debug";

/// Where log events ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Hands out the log file by reference, or stderr when there is none.
struct Sink(Option<File>);

impl<'a> MakeWriter<'a> for Sink {
    type Writer = Box<dyn io::Write + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        match &self.0 {
            Some(file) => Box::new(file),
            None => Box::new(io::stderr()),
        }
    }
}

fn open_log_file() -> Result<(PathBuf, File)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tdsconv")?;
    let dir = xdg_dirs.get_state_home().join("tdsconv");
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

    let path = dir.join("tdsconv.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;
    Ok((path, file))
}

/// Installs the global subscriber. Never fails: an unusable state dir means stderr.
pub fn init_logging() -> LogTarget {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (target, sink, file_err) = match open_log_file() {
        Ok((path, file)) => (LogTarget::File(path), Sink(Some(file)), None),
        Err(e) => (LogTarget::Stderr, Sink(None), Some(e)),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(sink)
        .with_ansi(false)
        .try_init();
    if installed.is_err() {
        // A subscriber from an earlier call is still active.
        return target;
    }

    match (&target, file_err) {
        (LogTarget::File(path), _) => tracing::info!("logging to {}", path.display()),
        (LogTarget::Stderr, Some(e)) => tracing::warn!("file logging unavailable: {:#}", e),
        (LogTarget::Stderr, None) => {}
    }
    target
}
