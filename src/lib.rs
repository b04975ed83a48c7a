//! vitals - liveness, readiness, and memory-status probes for containers.
//!
//! A minimal HTTP service exposing the health endpoints a container
//! orchestrator needs: `/health` evaluates process and host memory against
//! fixed thresholds, `/ready` reports whether startup has completed, and
//! `/` identifies the running instance.
//!
//! # Endpoints
//!
//! - `GET /` - service identity (environment, version, hostname)
//! - `GET /health` - memory health verdict, 200 healthy / 503 degraded
//! - `GET /ready` - readiness gate, 200 ready / 503 initializing
//! - `GET /debug/memory` - ballast control, registered outside production only
//!
//! # Example
//!
//! ```rust,ignore
//! use vitals::config::Config;
//! use vitals::server::Server;
//! use vitals::state::AppState;
//!
//! let config = Config::from_env()?;
//! let state = Arc::new(AppState::from_config(&config));
//! let server = Server::bind(config.server.listen_addr, state).await?;
//! server.run().await?;
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod debug;
pub mod health;
pub mod server;
pub mod state;
pub mod timestamp;

// Re-exports for convenience
pub use config::Config;
pub use server::Server;
pub use state::AppState;
