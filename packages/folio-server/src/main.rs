//! Folio server entry point.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::{InMemoryStore, JsonFileStore, PortfolioStore};
use folio_server::{Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Folio server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/folio.toml".to_string());

    let config = if Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        ServerConfig::from_file(Path::new(&config_path))?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };
    let config = config.with_port_override(std::env::var("PORT").ok().as_deref())?;

    let data_file = config
        .portfolio
        .data_file
        .clone()
        .unwrap_or_else(JsonFileStore::default_path);
    let file_store = JsonFileStore::new(data_file);

    let store: Arc<dyn PortfolioStore> = if file_store.exists() {
        info!("Serving portfolio data from {}", file_store.path().display());
        Arc::new(file_store)
    } else {
        warn!(
            "No data file at {}; serving the sample portfolio (run `folio seed` to create one)",
            file_store.path().display()
        );
        Arc::new(InMemoryStore::sample())
    };

    Server::new(config, store).start().await?;

    Ok(())
}
