use std::path::{Path, PathBuf};
use std::fs;
use log::debug;

use crate::config::types::{Config, Overrides};
use crate::config::validation;
use crate::utils::error::{OmdError, OmdResult};

/// Configuration file names to look for, in priority order
const CONFIG_FILES: [&str; 3] = ["omdconvert.toml", "omdconvert.yml", "omdconvert.yaml"];

/// Load the run configuration, apply command line overrides and validate it
pub fn load_config<P: AsRef<Path>>(
    working_dir: P,
    config_file: Option<PathBuf>,
    overrides: &Overrides,
) -> OmdResult<Config> {
    let config_path = match config_file {
        Some(path) => {
            if !path.exists() {
                return Err(OmdError::Config(format!(
                    "Configuration file not found: {}", path.display()
                )));
            }
            Some(path)
        }
        None => find_default_config_file(&working_dir),
    };

    let mut config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.apply(overrides);
    config.normalize_extensions();

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file in a directory
fn find_default_config_file<P: AsRef<Path>>(working_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| working_dir.as_ref().join(name))
        .find(|path| path.is_file())
}

/// Parse a configuration file based on its extension
fn parse_config_file(config_path: &Path) -> OmdResult<Config> {
    let content = fs::read_to_string(config_path)
        .map_err(|e| OmdError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    match ext.as_deref() {
        Some("toml") => parse_toml_config(&content, config_path),
        Some("yml") | Some("yaml") | None => parse_yaml_config(&content, config_path),
        Some(other) => Err(OmdError::Config(format!(
            "Unsupported configuration file format: {}", other
        ))),
    }
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> OmdResult<Config> {
    toml::from_str(content)
        .map_err(|e| OmdError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )))
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> OmdResult<Config> {
    // An empty YAML document means "all defaults"
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(content)
        .map_err(|e| OmdError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )))
}
