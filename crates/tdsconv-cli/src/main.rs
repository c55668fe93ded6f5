use tdsconv_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let target = logging::init_logging();
    tracing::debug!(?target, "logging ready");

    if let Err(err) = Cli::run_from_args() {
        tracing::error!("conversion failed: {:#}", err);
        eprintln!("tdsconv error: {:#}", err);
        std::process::exit(1);
    }
}
