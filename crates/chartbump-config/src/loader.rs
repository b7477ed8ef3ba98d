//! Configuration loader.

use std::path::Path;

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "chartbump.toml";

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;

    debug!(rules = config.version_rules.len(), "configuration loaded");
    Ok(config)
}

/// Finds and loads configuration starting from the given directory.
///
/// Walks up the directory tree until a configuration file is found.
///
/// # Errors
///
/// Returns an error if no configuration file is found or it cannot be parsed.
pub fn find_and_load_config_from(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    let start_dir = start_dir.as_ref();
    let mut dir = start_dir;

    loop {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return load_config(config_path);
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    Err(ConfigError::NotFound(start_dir.join(CONFIG_FILE_NAME)))
}
