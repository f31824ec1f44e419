//! Contact Manager - server entry point.

use anyhow::Result;
use contact_manager::repositories::{
    ContactRepository, InMemoryContactRepository, PostgresContactRepository,
};
use contact_manager::services::{ContactService, ContactServiceImpl};
use contact_manager::{server, AppState, Config, StoreConfig};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Logging is not up yet; fall back to stderr
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");

    let repository: Arc<dyn ContactRepository> = match &config.store {
        StoreConfig::Memory => {
            info!("Using in-memory contact store; data is lost on restart");
            Arc::new(InMemoryContactRepository::new())
        }
        StoreConfig::Postgres {
            url,
            max_connections,
        } => match PostgresContactRepository::connect(url, *max_connections).await {
            Ok(repo) => {
                info!("Connected to Postgres contact store");
                Arc::new(repo)
            }
            Err(e) => {
                error!("Failed to connect to database: {}", e);
                return Err(e.into());
            }
        },
    };

    let service = Arc::new(ContactServiceImpl::new(repository)) as Arc<dyn ContactService>;
    let app = server::router(AppState::new(service));

    server::run_server(app, config.bind_addr()).await?;

    info!("Contact Manager shutdown complete");
    Ok(())
}
