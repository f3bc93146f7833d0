//! Server configuration from environment variables.
//!
//! - `CAMPUS_HOST`: listen address (default: "0.0.0.0")
//! - `CAMPUS_PORT`: listen port (default: "8080")
//! - `RUST_LOG`: tracing filter (default: [`DEFAULT_LOG_FILTER`])

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "campus_server=info,campus_route=info,tower_http=info";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var} '{value}': {reason}")]
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Listen address of the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults
    /// for unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ServerConfig::default();

        let host = match lookup("CAMPUS_HOST") {
            Some(value) => value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidVar {
                    var: "CAMPUS_HOST",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.host,
        };

        let port = match lookup("CAMPUS_PORT") {
            Some(value) => value.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidVar {
                    var: "CAMPUS_PORT",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.port,
        };

        Ok(ServerConfig { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
