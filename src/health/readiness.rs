//! Readiness gate for Kubernetes probes.

use std::sync::atomic::{AtomicBool, Ordering};

/// One-way readiness flag.
///
/// Starts closed, opened exactly once by the startup task, never reverses.
/// `mark_ready` is idempotent; concurrent callers all observe the open
/// state after any one of them stores it.
#[derive(Debug, Default)]
pub struct ReadinessGate {
    ready: AtomicBool,
}

impl ReadinessGate {
    /// Create a gate in the not-ready state.
    pub fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
        }
    }

    /// Mark startup as complete. Safe to call more than once.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
    }

    /// Check whether startup has completed.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }
}
