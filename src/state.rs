//! Shared application state.

use crate::config::parse::env_opt;
use crate::config::{Config, Environment};
use crate::debug::MemoryBallast;
use crate::health::ReadinessGate;

/// State shared across connection tasks via `Arc`.
///
/// The readiness gate is the only piece mutated after startup; the ballast
/// guards its own buffer internally.
pub struct AppState {
    pub readiness: ReadinessGate,
    /// Debug memory ballast, wired in outside production only.
    pub ballast: Option<MemoryBallast>,
    pub environment: Environment,
    pub version: String,
    pub hostname: String,
}

impl AppState {
    /// Build process state from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let ballast = if config.environment.debug_endpoints_enabled() {
            Some(MemoryBallast::new())
        } else {
            None
        };

        Self {
            readiness: ReadinessGate::new(),
            ballast,
            environment: config.environment,
            version: config.server.version.clone(),
            hostname: resolve_hostname(),
        }
    }
}

/// Pod hostname: HOSTNAME is set in Kubernetes, the kernel file covers
/// bare processes.
fn resolve_hostname() -> String {
    if let Some(name) = env_opt("HOSTNAME") {
        return name;
    }
    std::fs::read_to_string("/proc/sys/kernel/hostname")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}
