//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `api.base_endpoint`.
pub const BACKEND_URL_ENV: &str = "ROOMMATE_BACKEND_URL";

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

/// Load and validate configuration.
///
/// With no path, defaults are used. `ROOMMATE_BACKEND_URL` wins over the
/// file's `api.base_endpoint` when set and non-empty.
pub fn load_config(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    load_config_with_endpoint(path, None)
}

/// Like [`load_config`], with an explicit base endpoint (e.g. from the
/// command line) taking precedence over both file and environment.
pub fn load_config_with_endpoint(
    path: Option<&Path>,
    endpoint: Option<String>,
) -> Result<ClientConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => ClientConfig::default(),
    };

    apply_env_overrides(&mut config, std::env::var(BACKEND_URL_ENV).ok());
    apply_env_overrides(&mut config, endpoint);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut ClientConfig, backend_url: Option<String>) {
    if let Some(url) = backend_url.filter(|u| !u.trim().is_empty()) {
        config.api.base_endpoint = Some(url);
    }
}
