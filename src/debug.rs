//! Debug memory ballast for exercising the health thresholds.
//!
//! Only wired into the router outside production. Holds a deliberately
//! oversized buffer so `/health` flips to degraded on demand; the memory
//! sampler just observes the grown resident set and has no knowledge of
//! this module.

use std::sync::Mutex;

use crate::health::MemorySample;

/// Ballast size: enough to push a small process past the 100 MiB warning.
const BALLAST_BYTES: usize = 150 * 1024 * 1024;

const BYTES_PER_MIB: usize = 1024 * 1024;

/// A droppable 150 MiB allocation behind a mutex.
#[derive(Debug, Default)]
pub struct MemoryBallast {
    buffer: Mutex<Option<Vec<u8>>>,
}

impl MemoryBallast {
    pub fn new() -> Self {
        Self {
            buffer: Mutex::new(None),
        }
    }

    /// Allocate the ballast, replacing any previous allocation.
    ///
    /// The buffer is filled with a nonzero byte so the pages are actually
    /// committed and show up in the resident set.
    pub fn allocate(&self) {
        let mut buffer = self.buffer.lock().unwrap();
        *buffer = Some(vec![1u8; BALLAST_BYTES]);
        tracing::info!("Allocated 150MB of memory for testing");
    }

    /// Drop the ballast.
    pub fn free(&self) {
        let mut buffer = self.buffer.lock().unwrap();
        *buffer = None;
        tracing::info!("Freed debug memory");
    }

    /// Size of the current allocation, if any.
    pub fn allocated_bytes(&self) -> Option<usize> {
        self.buffer.lock().unwrap().as_ref().map(Vec::len)
    }

    /// Run one debug action and render the plain-text response body.
    pub fn respond(&self, action: Option<&str>) -> String {
        match action {
            Some("allocate") => {
                self.allocate();
                "Allocated 150MB of memory. Check /health for warning.\n".to_string()
            }
            Some("free") => {
                self.free();
                "Freed debug memory. Check /health for clean status.\n".to_string()
            }
            Some("status") => {
                let sample = MemorySample::read();
                let mut body = format!(
                    "Current process memory usage: {} MB\n",
                    sample.process_bytes as usize / BYTES_PER_MIB
                );
                match self.allocated_bytes() {
                    Some(bytes) => {
                        body.push_str(&format!(
                            "Debug memory allocated: {} MB\n",
                            bytes / BYTES_PER_MIB
                        ));
                    }
                    None => body.push_str("No debug memory allocated\n"),
                }
                body
            }
            _ => concat!(
                "Debug memory endpoint. Use ?action=allocate|free|status\n",
                "Examples:\n",
                "  /debug/memory?action=allocate  - Allocate 150MB\n",
                "  /debug/memory?action=free      - Free memory\n",
                "  /debug/memory?action=status    - Show current usage\n"
            )
            .to_string(),
        }
    }
}
