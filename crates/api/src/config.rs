//! Process configuration, read from the environment.

use std::net::SocketAddr;

use thiserror::Error;

/// Environment variable holding the REST listen address.
pub const LISTEN_ADDR_VAR: &str = "STOCKROOM_LISTEN_ADDR";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Configuration that cannot be used to start the server.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid STOCKROOM_LISTEN_ADDR '{value}': {reason}")]
    InvalidListenAddr { value: String, reason: String },
}

/// Settings for the HTTP server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address the REST listener binds to.
    pub listen_addr: SocketAddr,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let Some(raw) = lookup(LISTEN_ADDR_VAR) else {
            tracing::info!("{LISTEN_ADDR_VAR} not set; using default {DEFAULT_LISTEN_ADDR}");
            return Ok(Self::default());
        };

        let listen_addr = raw
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidListenAddr {
                value: raw.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self { listen_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_falls_back_to_default() {
        let cfg = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.listen_addr.to_string(), DEFAULT_LISTEN_ADDR);
    }

    #[test]
    fn listen_addr_is_parsed() {
        let cfg = ApiConfig::from_lookup(|_| Some(" 127.0.0.1:9000 ".to_string())).unwrap();
        assert_eq!(cfg.listen_addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
    }

    #[test]
    fn invalid_listen_addr_is_an_error() {
        let err = ApiConfig::from_lookup(|_| Some("localhost".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidListenAddr { ref value, .. } if value == "localhost"));
    }
}
