use std::env;

use super::error::{ConfigError, parse_var};

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Server configuration for HTTP listener
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_vars(ip: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            ip: ip
                .filter(|ip| !ip.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IP.to_string()),
            port: parse_var("SERVICE_PORT", port)?.unwrap_or(DEFAULT_PORT),
        })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
