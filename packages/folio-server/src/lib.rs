//! # Folio Server
//!
//! Read-only REST API over the Folio portfolio analytics.
//!
//! ## Endpoints
//!
//! - `GET /api/portfolio/summary` - totals, performers and placeholders
//! - `GET /api/portfolio/holdings` - holdings with value and gain/loss
//! - `GET /api/portfolio/allocation` - allocation by sector and market cap
//! - `GET /api/portfolio/performance` - timeline and trailing returns
//! - `GET /api/portfolio/activity` - most recent trades
//!
//! ## Usage
//!
//! ```ignore
//! use folio_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default(), store);
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod handlers;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use folio_core::PortfolioStore;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;
use handlers::AppState;

/// Errors raised while configuring or starting the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Reading the config file or binding the socket failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for `ServerConfig`
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// The port override is not a valid port number
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    /// The configured host is not an IP address
    #[error("Invalid host: {0}")]
    InvalidHost(String),
}

/// The Folio server.
pub struct Server {
    config: ServerConfig,
    store: Arc<dyn PortfolioStore>,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig, store: Arc<dyn PortfolioStore>) -> Self {
        Self { config, store }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let state = Arc::new(AppState {
            store: self.store.clone(),
            metrics: self.config.portfolio.metrics.clone(),
            activity_limit: self.config.portfolio.activity_limit,
        });

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), ServerError> {
        let addr = self.config.socket_addr()?;

        info!("Starting Folio server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
