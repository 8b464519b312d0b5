//! Configuration module for loading and parsing TOML configuration files.

use engine_client::ClientConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Engine endpoint configuration.
    pub engine: EngineConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Engine endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Host of the engine's HTTP endpoint.
    pub host: String,
    /// Port of the engine's HTTP endpoint.
    pub port: u16,
    /// Optional request timeout in milliseconds.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            timeout_ms: None,
        }
    }
}

impl EngineConfig {
    /// Builds the client configuration for this endpoint.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            host: self.host.clone(),
            port: self.port,
            timeout: self.timeout_ms.map(Duration::from_millis),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Arguments
    /// * `content` - TOML content as string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "engine host cannot be empty".to_string(),
            ));
        }
        if self.engine.port == 0 {
            return Err(ConfigError::InvalidValue(
                "engine port must be positive".to_string(),
            ));
        }
        if self.engine.timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue(
                "engine timeout_ms must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[engine]
host = "10.0.0.5"
port = 7316
timeout_ms = 2500

[logging]
filter = "engine_client=debug"
"#;

        let config = Config::parse(toml_content).expect("should parse");
        assert_eq!(config.engine.host, "10.0.0.5");
        assert_eq!(config.engine.port, 7316);
        assert_eq!(config.engine.timeout_ms, Some(2500));
        assert_eq!(config.logging.filter, "engine_client=debug");
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("[engine]\nhost = \"localhost\"\nport = 8080\n")
            .expect("should parse");

        assert!(config.engine.timeout_ms.is_none());
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_client_config_conversion() {
        let engine = EngineConfig {
            host: "engine".to_string(),
            port: 9000,
            timeout_ms: Some(1500),
        };

        let client = engine.client_config();
        assert_eq!(client.host, "engine");
        assert_eq!(client.port, 9000);
        assert_eq!(client.timeout, Some(Duration::from_millis(1500)));
        assert_eq!(
            client.base_url().expect("valid url").as_str(),
            "http://engine:9000/"
        );
    }

    #[test]
    fn test_missing_engine_section() {
        let result = Config::parse("[logging]\nfilter = \"debug\"\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_validation_empty_host() {
        let config = Config {
            engine: EngineConfig {
                host: " ".to_string(),
                ..Default::default()
            },
            logging: LoggingConfig::default(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_port() {
        let result = Config::parse("[engine]\nhost = \"localhost\"\nport = 0\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let result = Config::parse("[engine]\nhost = \"localhost\"\nport = 80\ntimeout_ms = 0\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/engine-rpc.toml");
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
