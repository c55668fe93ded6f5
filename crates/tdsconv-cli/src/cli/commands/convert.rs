//! Default command: fetch, convert, write, reporting each milestone on stdout.

use anyhow::Result;
use chrono::Utc;
use std::path::Path;
use tdsconv_core::config::TdsConfig;
use tdsconv_core::fetch::SOURCE_URL;
use tdsconv_core::pipeline::{self, Milestone};

fn print_milestone(milestone: Milestone<'_>) {
    match milestone {
        Milestone::Fetching { .. } => println!("Fetching DuckDuckGo tracker blocklist..."),
        Milestone::VersionDetected { version } => println!("Blocklist version: {}", version),
        Milestone::Converting => println!("Converting to AdGuard format..."),
        Milestone::Converted { rules } => println!("Converted {} domains", rules),
        Milestone::Written { paths } => {
            println!("Blocklist saved to {}", paths.blocklist.display());
            println!("Version saved to {}", paths.version.display());
        }
    }
}

pub fn run_convert(cfg: &TdsConfig, output_dir: &Path) -> Result<()> {
    pipeline::run(SOURCE_URL, cfg, output_dir, Utc::now, print_milestone)?;
    println!("Conversion complete!");
    Ok(())
}
