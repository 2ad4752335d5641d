//! Server configuration
//!
//! Host, port, and CORS settings, read from the environment before the
//! listener binds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (env `PORT`, default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; permissive when empty
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

/// Environment configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a TCP port number
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// `HOST` and `PORT` override the defaults; an unset variable falls back,
    /// a set-but-garbage `PORT` is a configuration error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("HOST") {
            if !host.is_empty() {
                config.host = host;
            }
        }

        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        Ok(config)
    }

    /// Create a config with the given port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_deserialization_fills_defaults() {
        let config: ServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
    }
}
