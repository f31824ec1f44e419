//! Configuration management for the contact manager server.
//!
//! Values come from environment variables; a `.env` file in the working
//! directory is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::{IpAddr, SocketAddr};

/// Which store backs the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Process-local store; contents are lost on restart
    Memory,

    /// Postgres database
    Postgres {
        url: String,
        max_connections: u32,
    },
}

/// Configuration for the contact manager server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind (default: 0.0.0.0)
    pub host: IpAddr,

    /// Listening port (default: 3000)
    pub port: u16,

    /// Backing store
    pub store: StoreConfig,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `HOST`: Interface to bind (default: 0.0.0.0)
    /// - `PORT`: Listening port (default: 3000)
    /// - `DATABASE_URL`: `postgres://` URL; absent or `memory` selects the in-memory store
    /// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 5, minimum 1)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let host = match env::var("HOST") {
            Ok(val) => val.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "HOST".to_string(),
                reason: format!("Must be an IP address, got: {}", val),
            })?,
            Err(_) => Self::default().host,
        };

        let port = Self::parse_env_u16("PORT", 3000)?;
        let store = Self::store_from_env()?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            host,
            port,
            store,
            log_level,
        })
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    fn store_from_env() -> ConfigResult<StoreConfig> {
        let url = match env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() && url.trim() != "memory" => url,
            _ => return Ok(StoreConfig::Memory),
        };

        if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
            return Err(ConfigError::InvalidValue {
                var: "DATABASE_URL".to_string(),
                reason: "Must start with postgres:// or postgresql://, or be \"memory\"".to_string(),
            });
        }

        let max_connections = Self::parse_env_u32("DATABASE_MAX_CONNECTIONS", 5)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DATABASE_MAX_CONNECTIONS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        Ok(StoreConfig::Postgres {
            url,
            max_connections,
        })
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            store: StoreConfig::Memory,
            log_level: "info".to_string(),
        }
    }
}
