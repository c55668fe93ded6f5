use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::FetchOptions;

/// Configuration read from `~/.config/tdsconv/config.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TdsConfig {
    /// Seconds allowed to establish the connection to the source.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole fetch (connect, headers, body).
    pub timeout_secs: u64,
    /// File name of the generated AdGuard list.
    pub blocklist_file: String,
    /// File name of the version marker.
    pub version_file: String,
}

impl Default for TdsConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 60,
            blocklist_file: "adguard-blocklist.txt".to_string(),
            version_file: "version.txt".to_string(),
        }
    }
}

impl TdsConfig {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.connect_timeout_secs == 0 || self.timeout_secs == 0 {
            anyhow::bail!("timeouts must be at least 1 second");
        }
        for name in [&self.blocklist_file, &self.version_file] {
            if name.is_empty() || name.contains(['/', '\\']) {
                anyhow::bail!("output file name {:?} must be a plain file name", name);
            }
        }
        if self.blocklist_file == self.version_file {
            anyhow::bail!("blocklist_file and version_file must differ");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tdsconv")?;
    Ok(xdg_dirs.get_config_home().join("tdsconv").join("config.toml"))
}

/// Load configuration from disk, falling back to defaults when no file exists.
/// Nothing is written.
pub fn load() -> Result<TdsConfig> {
    let path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("config dir unavailable ({:#}), using defaults", e);
            return Ok(TdsConfig::default());
        }
    };
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(TdsConfig::default());
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<TdsConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: TdsConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
