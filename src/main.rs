use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitals::config::{Config, LoggingConfig};
use vitals::server::{spawn_startup_task, Server};
use vitals::state::AppState;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging before anything that might emit a warning
    // (permissive environment parsing logs through tracing).
    let logging = LoggingConfig::from_env()?;
    init_logging(&logging);

    info!("Starting vitals {}...", vitals::PKG_VERSION);

    let config = Config::from_env()?;
    config.log_summary();

    // Single-threaded runtime: probe traffic is tiny and the handlers
    // never block.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(config))
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(&logging.filter);

    if logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn async_main(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = Arc::new(AppState::from_config(&config));

    spawn_startup_task(Arc::clone(&state), config.server.startup_delay);

    let server = Server::bind(config.server.listen_addr, state).await?;
    run_server(server).await
}

async fn run_server(server: Server) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Handle shutdown gracefully
    tokio::select! {
        result = server.run() => {
            if let Err(e) = result {
                eprintln!("Server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down...");
        }
    }

    Ok(())
}
