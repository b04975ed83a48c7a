//! Deployment environment designation.

use std::fmt;

use super::parse::env_or;

/// Deployment environment the service runs in.
///
/// Controls the greeting served at `/` and whether the debug memory
/// endpoint is registered. Unknown values fall back to [`Environment::Dev`]
/// with a warning rather than refusing to start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Dev,
    Test,
    Stage,
    Prod,
}

impl Environment {
    /// Load from the `ENVIRONMENT` variable (default: dev).
    pub fn from_env() -> Self {
        Self::parse(&env_or("ENVIRONMENT", "dev"))
    }

    /// Parse an environment designation, falling back to dev on unknown input.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "dev" => Environment::Dev,
            "test" => Environment::Test,
            "stage" => Environment::Stage,
            "prod" => Environment::Prod,
            other => {
                tracing::warn!("Invalid environment '{}', defaulting to 'dev'", other);
                Environment::Dev
            }
        }
    }

    /// Canonical lowercase name, as reported in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Test => "test",
            Environment::Stage => "stage",
            Environment::Prod => "prod",
        }
    }

    /// Debug endpoints are withheld from production.
    pub fn debug_endpoints_enabled(&self) -> bool {
        !matches!(self, Environment::Prod)
    }

    /// Greeting served at the root endpoint.
    pub fn greeting(&self) -> &'static str {
        match self {
            Environment::Prod => "Hello from PROD! Live environment - handle with care!",
            Environment::Stage => "Hello from STAGE! Stage environment - safe for testing!",
            Environment::Test => "Hello from TEST! Test environment - safe for validation!",
            Environment::Dev => "Hello from DEV! Development environment - safe for debugging!",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
