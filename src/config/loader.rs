//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::SdkConfig;
use crate::config::validation::{join_errors, validate_options, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[source] std::io::Error),

    #[error("invalid TOML: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid [client] table: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// Load configuration from a TOML file.
///
/// The `[client]` table is only validated when it carries an API key; a file
/// without one is accepted so the key can come from the command line or the
/// environment. The SDK constructor validates again either way.
pub fn load_config(path: &Path) -> Result<SdkConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SdkConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    if config.client.api_key.is_some() {
        validate_options(&config.client).map_err(ConfigError::Validation)?;
    }

    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}
