//! Configuration file loading, validation, and environment overrides.

use crate::error::ConfigError;
use crate::types::BackdoorConfig;
use backdoor_common::ChunkEncoding;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "backdoor.toml";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "HDL_BACKDOOR_CONFIG";

/// Environment variable overriding `bridge.encoding`.
pub const ENCODING_ENV: &str = "HDL_BACKDOOR_ENCODING";

/// Loads and validates `<dir>/backdoor.toml`.
pub fn load_config(dir: &Path) -> Result<BackdoorConfig, ConfigError> {
    load_config_from_path(&dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_from_path(path: &Path) -> Result<BackdoorConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Loads `<dir>/backdoor.toml`, or returns the defaults if the file does not exist.
pub fn load_config_or_default(dir: &Path) -> Result<BackdoorConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
        return Ok(BackdoorConfig::default());
    }
    load_config_from_path(&path)
}

/// Parses and validates a `backdoor.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<BackdoorConfig, ConfigError> {
    let config: BackdoorConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Applies environment overrides to a loaded configuration.
///
/// `lookup` is the variable source, normally `|k| std::env::var(k).ok()`.
pub fn apply_env_overrides(
    mut config: BackdoorConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<BackdoorConfig, ConfigError> {
    if let Some(raw) = lookup(ENCODING_ENV) {
        config.bridge.encoding = raw
            .parse::<ChunkEncoding>()
            .map_err(|e| ConfigError::InvalidEnv {
                var: ENCODING_ENV.to_string(),
                reason: e.to_string(),
            })?;
    }
    Ok(config)
}

/// Validates that configuration values are usable.
fn validate_config(config: &BackdoorConfig) -> Result<(), ConfigError> {
    if config.bridge.default_max_width == 0 {
        return Err(ConfigError::ValidationError(
            "bridge.default_max_width must be positive".to_string(),
        ));
    }
    if config.bridge.max_width_param.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "bridge.max_width_param must not be empty".to_string(),
        ));
    }
    Ok(())
}
