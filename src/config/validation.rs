use std::path::{Path, PathBuf};
use log::{debug, info};

use crate::config::Config;
use crate::utils::error::{OmdError, OmdResult};
use crate::utils::path::clean_path;

/// Validate the configuration
pub fn validate_config(config: &Config) -> OmdResult<()> {
    // Validate source directory
    validate_source_directory(config)?;

    // Validate destination directory
    validate_destination_directory(config)?;

    // Validate extensions
    validate_extensions(config)?;

    Ok(())
}

/// Validate the source directory
fn validate_source_directory(config: &Config) -> OmdResult<()> {
    let source = &config.source;

    if !source.exists() {
        return Err(OmdError::Config(format!(
            "Source directory does not exist: {}", source.display()
        )));
    }

    if !source.is_dir() {
        return Err(OmdError::Config(format!(
            "Source path is not a directory: {}", source.display()
        )));
    }

    info!("Source directory: {}", source.display());
    Ok(())
}

/// Validate the destination directory
fn validate_destination_directory(config: &Config) -> OmdResult<()> {
    let destination = &config.destination;

    if destination.exists() && !destination.is_dir() {
        return Err(OmdError::Config(format!(
            "Destination path is not a directory: {}", destination.display()
        )));
    }

    let source = absolute(&config.source)?;
    let target = absolute(destination)?;
    debug!("Resolved source {} and destination {}", source.display(), target.display());

    // Clearing the destination would take the source files with it
    if source.starts_with(&target) {
        return Err(OmdError::Config(format!(
            "Destination {} must not contain the source directory {}",
            destination.display(),
            config.source.display()
        )));
    }

    info!("Destination directory: {}", destination.display());
    Ok(())
}

/// Validate input and output extensions
fn validate_extensions(config: &Config) -> OmdResult<()> {
    if config.extensions.is_empty() {
        return Err(OmdError::Config("At least one MIDI extension is required".to_string()));
    }

    if config.output_extension.is_empty() {
        return Err(OmdError::Config("Output extension must not be empty".to_string()));
    }

    if config.extensions.iter().any(|ext| *ext == config.output_extension) {
        return Err(OmdError::Config(format!(
            "Output extension '{}' is also listed as an input extension",
            config.output_extension
        )));
    }

    Ok(())
}

fn absolute(path: &Path) -> OmdResult<PathBuf> {
    Ok(clean_path(std::path::absolute(path)?))
}
