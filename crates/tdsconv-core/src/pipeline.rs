//! One run: fetch → transform → write.

use crate::config::TdsConfig;
use crate::error::ConvertError;
use crate::fetch;
use crate::storage::{self, OutputPaths};
use crate::transform;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Progress points reported while a run is underway, in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Milestone<'a> {
    Fetching { url: &'a str },
    VersionDetected { version: &'a str },
    Converting,
    Converted { rules: usize },
    Written { paths: &'a OutputPaths },
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub version: String,
    pub rule_count: usize,
    pub paths: OutputPaths,
}

/// Fetches `url`, converts it, and writes both outputs into `output_dir`.
///
/// `now` is read once the data set has arrived and stamps the header. A fetch failure
/// returns before any file is touched.
pub fn run<C, R>(
    url: &str,
    cfg: &TdsConfig,
    output_dir: &Path,
    now: C,
    mut report: R,
) -> Result<ConversionSummary, ConvertError>
where
    C: FnOnce() -> DateTime<Utc>,
    R: FnMut(Milestone<'_>),
{
    report(Milestone::Fetching { url });
    let dataset = fetch::fetch(url, cfg.fetch_options())?;
    let fetched_at = now();

    let version = dataset.version_string();
    tracing::info!(%version, trackers = dataset.trackers.len(), "data set parsed");
    report(Milestone::VersionDetected { version: &version });

    report(Milestone::Converting);
    let rules = transform::to_block_rules(&dataset);
    tracing::info!(rules = rules.len(), "converted to AdGuard rules");
    report(Milestone::Converted { rules: rules.len() });

    let header = transform::render_header(&version, fetched_at);
    let paths = OutputPaths::new(output_dir, &cfg.blocklist_file, &cfg.version_file);
    storage::write_outputs(&paths, &header, &rules, &version)?;
    report(Milestone::Written { paths: &paths });

    Ok(ConversionSummary {
        version,
        rule_count: rules.len(),
        paths,
    })
}
