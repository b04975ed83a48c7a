//! Health check module for Kubernetes probes.
//!
//! Three cooperating pieces:
//! - **Memory sampler**: one fresh read of process RSS and host memory per call.
//! - **Health evaluator**: fixed thresholds over a sample, producing a
//!   healthy/degraded verdict with human-readable warnings.
//! - **Readiness gate**: one-way atomic flag flipped when startup completes.
//!
//! # Kubernetes Integration
//!
//! ```yaml
//! livenessProbe:
//!   httpGet:
//!     path: /health
//!     port: 8080
//!   initialDelaySeconds: 5
//!   periodSeconds: 10
//!
//! readinessProbe:
//!   httpGet:
//!     path: /ready
//!     port: 8080
//!   initialDelaySeconds: 2
//!   periodSeconds: 5
//! ```

mod evaluator;
mod memory;
mod readiness;

pub use evaluator::{
    evaluate, HealthState, HealthVerdict, PROCESS_MEMORY_CHECK, SYSTEM_MEMORY_CHECK,
};
pub use memory::{HostMemory, MemorySample};
pub use readiness::ReadinessGate;
