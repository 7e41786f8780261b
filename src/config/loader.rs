// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::config::model::RelayConfig;
use crate::config::validate::validate_config;
use crate::errors::Result;

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization; missing keys take their
/// defaults. Use [`load_and_validate`] to also check the values.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RelayConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file at {:?}", path))?;

    let config: RelayConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<RelayConfig> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load `path` if given, otherwise fall back to the built-in defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<RelayConfig> {
    match path {
        Some(p) => load_and_validate(p),
        None => {
            debug!("no config file given; using built-in relay defaults");
            let config = RelayConfig::default();
            validate_config(&config)?;
            Ok(config)
        }
    }
}
