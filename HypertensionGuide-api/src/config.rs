use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Server configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Invalid HOST value '{value}': {source}")]
    InvalidHost {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Runtime settings for the API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Deployment environment reported by the health endpoint
    pub environment: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            environment: "development".to_string(),
        }
    }
}

impl ApiConfig {
    /// Read HOST, PORT and APP_ENV from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; unset keys fall back to the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidHost { value, source })?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        Ok(Self {
            host,
            port,
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
