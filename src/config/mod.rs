//! Environment-driven configuration.
//!
//! Every knob is an environment variable with a default, loaded once at
//! startup into one [`Config`] value. Nothing here is re-read at runtime.
//!
//! | Variable        | Default        | Meaning                                |
//! |-----------------|----------------|----------------------------------------|
//! | `LISTEN_ADDR`   | `0.0.0.0:8080` | HTTP bind address                      |
//! | `ENVIRONMENT`   | `dev`          | `dev`/`test`/`stage`/`prod`            |
//! | `APP_VERSION`   | crate version  | reported at `/`                        |
//! | `STARTUP_DELAY` | `2s`           | readiness delay; `off`/`0` = immediate |
//! | `LOG_LEVEL`     | -              | bare level, scoped to this crate       |
//! | `RUST_LOG`      | -              | full tracing filter syntax             |
//! | `LOG_FORMAT`    | `text`         | `json` switches to JSON lines          |

mod environment;
mod error;
mod logging;
pub(crate) mod parse;
mod server;

pub use environment::Environment;
pub use error::ConfigError;
pub use logging::LoggingConfig;
pub use server::ServerConfig;

/// Everything the process reads from its environment, loaded once.
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub environment: Environment,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Log the effective settings at startup.
    pub fn log_summary(&self) {
        use tracing::info;

        info!("Configuration loaded:");
        info!("  Listen: {}", self.server.listen_addr);
        info!("  Environment: {}", self.environment);
        info!("  Version: {}", self.server.version);

        match self.server.startup_delay {
            Some(delay) => info!("  Startup delay: {:?}", delay),
            None => info!("  Startup delay: off (ready immediately)"),
        }

        if self.environment.debug_endpoints_enabled() {
            info!("  Debug endpoints: enabled");
        } else {
            info!("  Debug endpoints: disabled (production)");
        }
    }
}
