//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::RecastConfig;
use std::path::Path;

/// The configuration file name looked up inside a project directory.
pub const CONFIG_FILE_NAME: &str = "recast.toml";

/// Largest accepted `format.max_indent`.
const MAX_INDENT_LIMIT: usize = 256;

/// Loads and validates `recast.toml` from a project directory.
///
/// A directory without a configuration file yields the defaults.
pub fn load_config(project_dir: &Path) -> Result<RecastConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(RecastConfig::default());
    }
    load_config_from_path(&config_path)
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_from_path(path: &Path) -> Result<RecastConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `recast.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<RecastConfig, ConfigError> {
    let config: RecastConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks that numeric settings are within their supported ranges.
pub fn validate_config(config: &RecastConfig) -> Result<(), ConfigError> {
    if config.format.tab_width == 0 {
        return Err(ConfigError::ValidationError(
            "format.tab_width must be at least 1".to_string(),
        ));
    }
    if config.format.max_indent == 0 || config.format.max_indent > MAX_INDENT_LIMIT {
        return Err(ConfigError::ValidationError(format!(
            "format.max_indent must be between 1 and {MAX_INDENT_LIMIT}, got {}",
            config.format.max_indent
        )));
    }
    Ok(())
}
