//! Configuration file parsing for the web demo.
//!
//! Loads the bind address and port from TOML. The `PORT` environment
//! variable, when set, overrides the port from the file.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable that overrides the bind port
pub const PORT_ENV_VAR: &str = "PORT";

/// Web configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Port value is not a valid u16
    #[error("Invalid port: {0}")]
    InvalidPort(String),
}

/// Web demo configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebConfig {
    /// Bind address (e.g., "0.0.0.0")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 5000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_bind_port() -> u16 {
    5000
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
        }
    }
}

impl WebConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: WebConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply a port override, typically the value of `PORT`
    pub fn with_port_override(mut self, port: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(port) = port {
            self.bind_port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;
        }
        Ok(self)
    }

    /// Apply the `PORT` environment variable if it is set
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        let port = std::env::var(PORT_ENV_VAR).ok();
        self.with_port_override(port.as_deref())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WebConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "127.0.0.1"
            bind_port = 9000
        "#;

        let config: WebConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 9000);
    }

    #[test]
    fn test_parse_empty_toml_uses_defaults() {
        let config: WebConfig = toml::from_str("").unwrap();
        assert_eq!(config, WebConfig::default());
    }

    #[test]
    fn test_port_override() {
        let config = WebConfig::default().with_port_override(Some("8081")).unwrap();
        assert_eq!(config.bind_port, 8081);

        let config = WebConfig::default().with_port_override(None).unwrap();
        assert_eq!(config.bind_port, 5000);

        assert!(matches!(
            WebConfig::default().with_port_override(Some("eighty")),
            Err(ConfigError::InvalidPort(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("web.toml");
        std::fs::write(&path, "bind_port = 6000\n").unwrap();

        let config = WebConfig::from_file(&path).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 6000);
    }
}
