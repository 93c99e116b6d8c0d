pub mod types;
pub mod logging;

use clap::Parser;
use log::{debug, LevelFilter};
use std::path::PathBuf;

use crate::batch::{self, BatchSummary};
use crate::config;
use crate::converter::ExternalConverter;
use crate::utils::error::OmdResult;

/// Run the command-line interface
pub fn run() -> OmdResult<BatchSummary> {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.verbose);

    let config = config::load_config(PathBuf::from("."), cli.config.clone(), &cli.overrides())?;
    if config.verbose {
        logging::set_log_level(LevelFilter::Debug);
    }

    let converter = ExternalConverter::new(config.converter.clone());
    debug!("Using converter {}", converter.program().display());

    let summary = batch::convert_all(&config, &converter)?;
    println!("{}", summary);

    Ok(summary)
}
