//! Server configuration.

use std::net::SocketAddr;
use std::time::Duration;

use super::parse::{env_duration, env_or};
use super::ConfigError;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STARTUP_DELAY: &str = "2s";

/// Listener and identity settings.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Bind address (LISTEN_ADDR).
    pub listen_addr: SocketAddr,
    /// Simulated initialization time before the readiness gate opens
    /// (STARTUP_DELAY); `off`/`0` means ready immediately.
    pub startup_delay: Option<Duration>,
    /// Version string reported at the root endpoint (APP_VERSION).
    pub version: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_addr = env_or("LISTEN_ADDR", DEFAULT_LISTEN_ADDR);
        let listen_addr = raw_addr
            .parse()
            .map_err(|e| ConfigError::invalid("LISTEN_ADDR", &raw_addr, format!("{}", e)))?;

        Ok(Self {
            listen_addr,
            startup_delay: env_duration("STARTUP_DELAY", DEFAULT_STARTUP_DELAY)?,
            version: env_or("APP_VERSION", crate::PKG_VERSION),
        })
    }
}
