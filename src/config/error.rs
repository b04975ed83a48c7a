//! Configuration error type.

use std::fmt;

/// The environment held a value the service cannot use.
#[derive(Debug)]
pub enum ConfigError {
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// Wrap a rejected variable together with why it was rejected.
    pub fn invalid(key: &str, value: &str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ConfigError::Invalid { key, value, reason } = self;
        write!(f, "invalid {}={:?}: {}", key, value, reason)
    }
}

impl std::error::Error for ConfigError {}
