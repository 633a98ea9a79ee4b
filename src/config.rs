//! Configuration loading and management for briefly.
//!
//! Loads settings from `briefly.toml` with environment variable overrides
//! for sensitive data. Every setting has a default, so the tool runs with
//! no config file at all.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Default hosted endpoint for the summarisation model
pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/sshleifer/distilbart-cnn-12-6";

/// Default maximum summary length, in generated tokens
pub const DEFAULT_MAX_LENGTH: u32 = 150;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Inference endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// URL of the summarisation endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Maximum summary length in generated tokens
    #[serde(default = "default_max_length")]
    pub max_length: u32,
}

/// API tokens (usually supplied via environment)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub hf_token: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_max_length() -> u32 {
    DEFAULT_MAX_LENGTH
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            max_length: default_max_length(),
        }
    }
}

impl Config {
    /// Load configuration from the default location (briefly.toml in cwd
    /// or home), falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                let mut config = Config::default();
                config.apply_env_overrides();
                Ok(config)
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Override sensitive values from environment variables
    fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var("HF_API_TOKEN") {
            self.api.hf_token = Some(token);
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let local_config = PathBuf::from("briefly.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("briefly").join("briefly.toml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_point_at_hosted_model() {
        let config = Config::default();
        assert_eq!(config.inference.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.inference.max_length, 150);
    }

    #[test]
    fn parses_partial_config_with_defaults() {
        let config: Config = toml::from_str(
            r#"
            [inference]
            max_length = 80
            "#,
        )
        .unwrap();
        assert_eq!(config.inference.max_length, 80);
        assert_eq!(config.inference.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [inference]
            endpoint = "http://localhost:8080/summarise"
            max_length = 100
            "#
        )
        .unwrap();

        let config = Config::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.inference.endpoint, "http://localhost:8080/summarise");
        assert_eq!(config.inference.max_length, 100);
    }

    #[test]
    fn rejects_malformed_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [").unwrap();

        let result = Config::load_from(&file.path().to_path_buf());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
