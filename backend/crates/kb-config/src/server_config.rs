use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT};

use std::net::IpAddr;

use serde::Deserialize;

/// Where the HTTP API listens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// IP address, or `localhost`
    pub host: String,
    /// 0 lets the OS pick a free port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// `host:port`, bracketing IPv6 literals.
    pub fn bind_addr(&self) -> String {
        match self.host.trim().parse::<IpAddr>() {
            Ok(IpAddr::V6(ip)) => format!("[{}]:{}", ip, self.port),
            _ => format!("{}:{}", self.host.trim(), self.port),
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let host = self.host.trim();
        if host != "localhost" && host.parse::<IpAddr>().is_err() {
            return Err(ConfigError::invalid(
                "server.host",
                format!("'{}' is not an IP address or 'localhost'", self.host),
            ));
        }

        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::invalid(
                "server.port",
                format!("must be 0 (auto) or >= {MIN_PORT}, got {}", self.port),
            ));
        }

        Ok(())
    }
}
