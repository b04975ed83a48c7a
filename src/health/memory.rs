//! Memory sampling from /proc.

use std::fs;

/// Host-level memory accounting.
///
/// Only constructed from figures that pass the validity invariant
/// (`total_bytes > 0`, `available_bytes <= total_bytes`); malformed host
/// accounting yields no sample at all rather than zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostMemory {
    /// Total memory in bytes (MemTotal).
    pub total_bytes: u64,
    /// Available memory in bytes (MemAvailable).
    pub available_bytes: u64,
}

impl HostMemory {
    /// Used memory in bytes (total - available).
    pub fn used_bytes(&self) -> u64 {
        self.total_bytes - self.available_bytes
    }

    /// Memory usage percentage.
    pub fn usage_percent(&self) -> f64 {
        (self.used_bytes() as f64 / self.total_bytes as f64) * 100.0
    }
}

/// One memory snapshot, created fresh per evaluation and never cached.
#[derive(Debug, Clone, Copy)]
pub struct MemorySample {
    /// Resident set size of this process in bytes (VmRSS). Covers
    /// allocator-retained pages, not just live objects.
    pub process_bytes: u64,
    /// Host memory figures, absent when host accounting is unavailable
    /// or malformed.
    pub host: Option<HostMemory>,
}

impl MemorySample {
    /// Read current memory figures from /proc.
    ///
    /// The process figure degrades to 0 on read failure; the host figures
    /// degrade to `None`. Sampling never errors.
    pub fn read() -> Self {
        let process_bytes = fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|s| parse_status_rss(&s))
            .unwrap_or(0);

        let host = fs::read_to_string("/proc/meminfo")
            .ok()
            .and_then(|s| parse_meminfo(&s));

        Self {
            process_bytes,
            host,
        }
    }

    /// True when the host portion of the sample could not be obtained.
    pub fn is_partial(&self) -> bool {
        self.host.is_none()
    }
}

/// Parse "VmRSS:    123456 kB" out of /proc/self/status content.
fn parse_status_rss(content: &str) -> Option<u64> {
    for line in content.lines() {
        if let Some(rest) = line.strip_prefix("VmRSS:") {
            return parse_first_u64(rest).map(|kb| kb * 1024);
        }
    }
    None
}

/// Parse MemTotal/MemAvailable out of /proc/meminfo content.
fn parse_meminfo(content: &str) -> Option<HostMemory> {
    let mut total = None;
    let mut available = None;

    for line in content.lines() {
        if let Some(rest) = line.strip_prefix("MemTotal:") {
            total = parse_first_u64(rest);
        } else if let Some(rest) = line.strip_prefix("MemAvailable:") {
            available = parse_first_u64(rest);
        }
    }

    // Validity invariant: a missing or unparseable field discards the
    // whole sample; zeros are never fabricated.
    let total_bytes = total? * 1024;
    let available_bytes = available? * 1024;
    if total_bytes > 0 && available_bytes <= total_bytes {
        Some(HostMemory {
            total_bytes,
            available_bytes,
        })
    } else {
        None
    }
}

/// Extract the first number in a string like "   12345 kB".
fn parse_first_u64(s: &str) -> Option<u64> {
    s.split_whitespace().next()?.parse().ok()
}
