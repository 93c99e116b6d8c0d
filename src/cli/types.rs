use clap::Parser;
use std::path::PathBuf;

use crate::config::Overrides;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "omdconvert-all")]
#[command(about = "A tool for mass converting midi files into .omd files for use in the OneTesla interrupter.", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory where .omd files and subdirectories will be populated (defaults to ./omd)
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Directory where midi files and subdirectories are converted from (defaults to ./midi)
    #[arg(short = 's', long = "source", value_name = "DIR")]
    pub origin: Option<PathBuf>,

    /// Converter executable (defaults to omdconvert.exe)
    #[arg(short = 'c', long, value_name = "PROGRAM")]
    pub converter: Option<PathBuf>,

    /// Configuration file (defaults to omdconvert.toml or omdconvert.yml if present)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Values from the command line that take precedence over the config file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            source: self.origin.clone(),
            destination: self.destination.clone(),
            converter: self.converter.clone(),
            verbose: self.verbose,
        }
    }
}
