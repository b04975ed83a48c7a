//! Threshold evaluation over memory samples.

use std::collections::BTreeMap;

use crate::timestamp::Iso8601Timestamp;

use super::memory::MemorySample;

/// Process memory threshold: warn when resident bytes exceed 100 MiB.
const PROCESS_WARN_BYTES: u64 = 100 * 1024 * 1024;

/// Host memory threshold: warn when usage exceeds 80%.
const HOST_WARN_PERCENT: f64 = 80.0;

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Warning key for the process resident-memory check.
pub const PROCESS_MEMORY_CHECK: &str = "process_memory";
/// Warning key for the host memory-usage check.
pub const SYSTEM_MEMORY_CHECK: &str = "system_memory";

/// Overall health state of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    Healthy,
    Degraded,
}

impl HealthState {
    #[inline]
    pub fn is_healthy(self) -> bool {
        matches!(self, HealthState::Healthy)
    }

    /// Status string reported at the boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Healthy => "healthy",
            HealthState::Degraded => "degraded",
        }
    }
}

/// Outcome of one health evaluation.
///
/// `warnings` keeps the process-memory entry ahead of the system-memory
/// entry; with these two fixed keys the map's sort order is the report
/// order.
#[derive(Debug, Clone)]
pub struct HealthVerdict {
    pub state: HealthState,
    pub warnings: BTreeMap<&'static str, String>,
    pub timestamp: Iso8601Timestamp,
}

impl HealthVerdict {
    #[inline]
    pub fn is_healthy(&self) -> bool {
        self.state.is_healthy()
    }
}

/// Evaluate a memory sample against the fixed thresholds.
///
/// Pure over the sample: the same figures always produce the same state
/// and warnings. An absent host portion skips the host check entirely.
pub fn evaluate(sample: MemorySample) -> HealthVerdict {
    let mut warnings = BTreeMap::new();

    if sample.process_bytes > PROCESS_WARN_BYTES {
        warnings.insert(
            PROCESS_MEMORY_CHECK,
            format!("WARNING: {} MB", sample.process_bytes / BYTES_PER_MIB),
        );
    }

    if let Some(host) = sample.host {
        let percent = host.usage_percent();
        if percent > HOST_WARN_PERCENT {
            warnings.insert(SYSTEM_MEMORY_CHECK, format!("WARNING: {:.1}%", percent));
        }
    }

    let state = if warnings.is_empty() {
        HealthState::Healthy
    } else {
        HealthState::Degraded
    };

    HealthVerdict {
        state,
        warnings,
        timestamp: Iso8601Timestamp::now(),
    }
}
