// Module declarations
mod batch;
mod cli;
mod config;
mod converter;
mod directory;
mod utils;

use std::process;

fn main() {
    // Run the CLI
    if let Err(e) = cli::run() {
        log::error!("{}", e);
        process::exit(1);
    }
}
