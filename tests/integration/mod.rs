//! Integration tests for vitals
//!
//! Each test spawns the server in-process on an ephemeral port and drives
//! it over real HTTP, so the full routing and serialization path is
//! exercised exactly as a probe would see it.

mod helpers;

mod debug_endpoint;
mod probes;
