/// Configuration loading from TOML file
use std::path::Path;

use crate::error::{CalcError, Result};
use crate::types::Config;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CalcError::ConfigError(format!("Failed to read config file: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CalcError::ConfigError(format!("Failed to parse config: {}", e)))?;

    // Validate config
    validate_config(&config)?;

    Ok(config)
}

/// Load the config file if present, otherwise fall back to built-in defaults.
/// The tool must stay usable with no files on disk. Returns whether a file
/// was loaded; the caller logs once the subscriber is up.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<(Config, bool)> {
    if path.as_ref().exists() {
        Ok((load_config(path)?, true))
    } else {
        Ok((Config::default(), false))
    }
}

fn validate_config(config: &Config) -> Result<()> {
    // Validate country code (ISO 3166-1 alpha-2)
    if config.country_code.len() != 2
        || !config.country_code.chars().all(|c| c.is_ascii_alphabetic())
    {
        return Err(CalcError::ConfigError(format!(
            "Invalid country_code: {}",
            config.country_code
        )));
    }

    // Validate API endpoint
    if !config.api_base_url.starts_with("http://") && !config.api_base_url.starts_with("https://") {
        return Err(CalcError::ConfigError(format!(
            "Invalid api_base_url: {}",
            config.api_base_url
        )));
    }

    // Validate fixed mode endpoints
    if config.year_end <= config.term_resume {
        return Err(CalcError::ConfigError(
            "year_end must be after term_resume".to_string(),
        ));
    }

    Ok(())
}
