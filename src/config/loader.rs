//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `gateway.base_url`.
pub const ENV_GATEWAY_URL: &str = "ANVIL_API_URL";
/// Environment variable overriding `gateway.api_key`.
pub const ENV_API_KEY: &str = "ANVIL_API_KEY";
/// Environment variable overriding `gateway.network`.
pub const ENV_NETWORK: &str = "CARDANO_NETWORK";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env(String),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env(e) => write!(f, "Environment error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration: optional TOML file, then environment overrides,
/// then semantic validation.
pub fn load(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        None => RelayConfig::default(),
    };

    apply_env_overrides(&mut config)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply process-environment overrides to a loaded configuration.
///
/// The gateway secret in particular is expected to arrive this way rather
/// than living in a config file on disk.
pub fn apply_env_overrides(config: &mut RelayConfig) -> Result<(), ConfigError> {
    if let Ok(url) = std::env::var(ENV_GATEWAY_URL) {
        config.gateway.base_url = url;
    }
    if let Ok(key) = std::env::var(ENV_API_KEY) {
        config.gateway.api_key = key;
    }
    if let Ok(network) = std::env::var(ENV_NETWORK) {
        config.gateway.network = network
            .parse()
            .map_err(|e: String| ConfigError::Env(format!("{}: {}", ENV_NETWORK, e)))?;
    }
    Ok(())
}
