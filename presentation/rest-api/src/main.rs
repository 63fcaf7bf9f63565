use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// SmartServe kitchen backend entry point
///
/// Loads configuration, opens the key-value store, wires use cases to their
/// adapters and serves the HTTP API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Open storage
    let store = config.storage.init_store().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(&config, store)?;

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
