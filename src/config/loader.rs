//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Overrides `api.base_url`.
pub const ENV_API_URL: &str = "HOTEL_API_URL";
/// Overrides `session.path`.
pub const ENV_SESSION_PATH: &str = "HOTEL_SESSION_PATH";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ClientConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load the file when one is given, fall back to defaults otherwise, then
/// apply environment overrides and validate the result.
pub fn load_or_default(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            info!(path = %path.display(), "Loaded configuration file");
            toml::from_str(&content)?
        }
        None => ClientConfig::default(),
    };

    apply_overrides(&mut config, |key| env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_overrides(config: &mut ClientConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(ENV_API_URL) {
        debug!(base_url = %url, "{ENV_API_URL} override");
        config.api.base_url = url;
    }
    if let Some(path) = lookup(ENV_SESSION_PATH) {
        debug!(path = %path, "{ENV_SESSION_PATH} override");
        config.session.path = path;
    }
}
