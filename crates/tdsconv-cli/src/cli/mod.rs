//! CLI for the tracker blocklist converter.

mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tdsconv_core::config;

use commands::run_convert;

/// Fetch DuckDuckGo's tracker data set and write it out as an AdGuard blocklist.
#[derive(Debug, Parser)]
#[command(name = "tdsconv", version)]
#[command(
    about = "Convert the DuckDuckGo tracker blocklist to AdGuard format",
    long_about = None
)]
pub struct Cli {
    /// Directory for the blocklist and version files (default: current directory).
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let output_dir = match cli.output_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        run_convert(&cfg, &output_dir)
    }
}
