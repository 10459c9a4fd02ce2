//! Server configuration from environment variables

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Bind configuration for a portal service
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the service listens on
    pub bind_addr: String,
}

impl ServerConfig {
    /// Read the bind address from `var`, falling back to `default`
    pub fn from_env(var: &str, default: &str) -> ConfigResult<Self> {
        let bind_addr = env::var(var).unwrap_or_else(|_| default.to_string());

        if bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "{} is not a valid socket address: {}",
                var, bind_addr
            )));
        }

        Ok(Self { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::from_env("PORTAL_UNSET_ADDR", "127.0.0.1:3000")
            .expect("Failed to create server config");
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
    }

    #[test]
    fn test_server_config_rejects_invalid_default() {
        assert!(ServerConfig::from_env("PORTAL_UNSET_ADDR", "not-an-address").is_err());
    }
}
