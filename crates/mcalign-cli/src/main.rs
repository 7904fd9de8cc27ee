mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use crate::config::PartialAlignmentConfig;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("🚀 mcalign v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = PartialAlignmentConfig::load(cli.config.as_deref())
        .and_then(|partial| {
            info!("Merging configuration from file and CLI arguments...");
            partial.merge_with_cli(&cli)
        })
        .and_then(|app_config| commands::align::run(&app_config, !cli.quiet));

    match &command_result {
        Ok(_) => info!("✅ Alignment completed successfully."),
        Err(e) => error!("❌ Alignment failed: {}", e),
    }

    command_result
}
