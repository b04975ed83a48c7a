//! Logging configuration.

use super::parse::{env_opt, env_or};
use super::ConfigError;

const DEFAULT_FILTER: &str = "vitals=info";

/// Logging setup resolved from the environment.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Tracing filter directive string.
    pub filter: String,
    /// Emit JSON log lines instead of human-readable ones (LOG_FORMAT=json).
    pub json: bool,
}

impl LoggingConfig {
    /// Resolve from LOG_LEVEL, RUST_LOG, and LOG_FORMAT.
    ///
    /// LOG_LEVEL wins and takes a bare level name (trace through error),
    /// scoped to this crate. RUST_LOG passes through untouched, so full
    /// tracing filter syntax (`vitals=debug,hyper=warn`) still works.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            filter: resolve_filter(),
            json: env_or("LOG_FORMAT", "text").eq_ignore_ascii_case("json"),
        })
    }
}

fn resolve_filter() -> String {
    if let Some(level) = env_opt("LOG_LEVEL") {
        let level = level.to_lowercase();
        if matches!(
            level.as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return format!("vitals={}", level);
        }
        // The subscriber is not up yet, so this goes to stderr directly.
        eprintln!(
            "Warning: Invalid LOG_LEVEL '{}', expected: trace, debug, info, warn, error",
            level
        );
    }

    env_opt("RUST_LOG").unwrap_or_else(|| DEFAULT_FILTER.to_string())
}
