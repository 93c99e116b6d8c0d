use std::path::PathBuf;
use serde::Deserialize;

use crate::config::defaults;

/// Run configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Origin directory scanned for MIDI files
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Destination directory, cleared and recreated on every run
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// Converter executable, either a bare name or a path
    #[serde(default = "defaults::default_converter")]
    pub converter: PathBuf,

    /// MIDI file extensions to convert
    #[serde(default = "defaults::default_extensions")]
    pub extensions: Vec<String>,

    /// Extension of the files the converter writes
    #[serde(default = "defaults::default_output_extension")]
    pub output_extension: String,

    /// Log every step of the run
    #[serde(default = "defaults::default_verbose")]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: defaults::default_source(),
            destination: defaults::default_destination(),
            converter: defaults::default_converter(),
            extensions: defaults::default_extensions(),
            output_extension: defaults::default_output_extension(),
            verbose: defaults::default_verbose(),
        }
    }
}

impl Config {
    /// Apply command line overrides on top of the loaded values
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(source) = &overrides.source {
            self.source = source.clone();
        }
        if let Some(destination) = &overrides.destination {
            self.destination = destination.clone();
        }
        if let Some(converter) = &overrides.converter {
            self.converter = converter.clone();
        }
        if overrides.verbose {
            self.verbose = true;
        }
    }

    /// Strip leading dots and lowercase all extensions
    pub fn normalize_extensions(&mut self) {
        self.extensions = self
            .extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self.output_extension = self
            .output_extension
            .trim()
            .trim_start_matches('.')
            .to_lowercase();
    }
}

/// Values given on the command line, which win over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub converter: Option<PathBuf>,
    pub verbose: bool,
}
