//! Environment variable parsing helpers.

use std::time::Duration;

use super::ConfigError;

/// Read a variable, falling back to `default` when unset.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read a variable, treating unset and empty the same.
pub fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

/// Parse a human duration: `500ms`, `30s`, `2m`, `1h`, or bare seconds.
///
/// `off`, `0`, and the empty string all mean "disabled" and map to `None`.
pub fn parse_duration(raw: &str) -> Result<Option<Duration>, String> {
    let lowered = raw.trim().to_lowercase();
    if matches!(lowered.as_str(), "" | "off" | "0") {
        return Ok(None);
    }

    let (digits, build): (&str, fn(u64) -> Duration) =
        if let Some(n) = lowered.strip_suffix("ms") {
            (n, Duration::from_millis)
        } else if let Some(n) = lowered.strip_suffix('s') {
            (n, Duration::from_secs)
        } else if let Some(n) = lowered.strip_suffix('m') {
            (n, |mins| Duration::from_secs(mins * 60))
        } else if let Some(n) = lowered.strip_suffix('h') {
            (n, |hours| Duration::from_secs(hours * 3_600))
        } else {
            // No unit: bare seconds.
            (lowered.as_str(), Duration::from_secs)
        };

    digits
        .parse::<u64>()
        .map(|count| Some(build(count)))
        .map_err(|_| format!("invalid duration '{}'", raw.trim()))
}

/// Read and parse a duration variable, wrapping failures as [`ConfigError`].
pub fn env_duration(key: &str, default: &str) -> Result<Option<Duration>, ConfigError> {
    let value = env_or(key, default);
    parse_duration(&value).map_err(|reason| ConfigError::invalid(key, &value, reason))
}
