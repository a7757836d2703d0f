//! Server configuration loaded from environment variables.
//!
//! - `ITEMS_HOST`: listen host (default: "0.0.0.0")
//! - `ITEMS_PORT`: listen port (default: 8080)

use thiserror::Error;

pub const HOST_VAR: &str = "ITEMS_HOST";
pub const PORT_VAR: &str = "ITEMS_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid ITEMS_PORT value '{value}': {reason}")]
    InvalidPort { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup, falling
    /// back to defaults for unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup(HOST_VAR).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidPort {
                    value: port.clone(),
                    reason: e.to_string(),
                })?;
        }
        Ok(config)
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.host, "0.0.0.0");
        assert_eq!(c.port, 8080);
        assert_eq!(c.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn unset_variables_use_defaults() {
        let c = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(c, ServerConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let c = ServerConfig::from_lookup(lookup(&[(HOST_VAR, "127.0.0.1"), (PORT_VAR, " 9000 ")]))
            .unwrap();
        assert_eq!(c.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn blank_host_is_ignored() {
        let c = ServerConfig::from_lookup(lookup(&[(HOST_VAR, "  ")])).unwrap();
        assert_eq!(c.host, "0.0.0.0");
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));
        assert!(err.to_string().starts_with("invalid ITEMS_PORT value 'http'"));

        assert!(ServerConfig::from_lookup(lookup(&[(PORT_VAR, "70000")])).is_err());
    }
}
