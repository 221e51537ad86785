//! Folio Core - Portfolio analytics library.
//!
//! This crate provides the analytics behind the Folio portfolio API:
//!
//! - **Metrics**: enhanced holdings, summary totals, top/worst performers
//! - **Allocation**: value breakdown by sector and market-cap tier
//! - **Performance**: trailing returns over a value timeline
//! - **Storage**: the `PortfolioStore` trait with in-memory and JSON file backends
//!
//! # Example
//!
//! ```rust
//! use folio_core::portfolio::calculate;
//! use folio_core::store::{InMemoryStore, PortfolioStore};
//!
//! let store = InMemoryStore::sample();
//! let holdings = store.holdings().unwrap();
//!
//! let metrics = calculate(&holdings).unwrap();
//! println!("Total value: {:.2}", metrics.summary.total_value);
//! println!("Top performer: {}", metrics.summary.top_performer.symbol);
//! ```

pub mod config;
pub mod portfolio;
mod sample;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use types::{
    Activity, Allocation, AllocationEntry, ApiResponse, BenchmarkReturns, EnhancedHolding,
    Holding, PerformanceHistory, Performer, PortfolioMetrics, PortfolioSnapshot,
    PortfolioSummary, ReturnWindows, TimelinePoint, TradeSide,
};

// Re-export main functionality
pub use config::{FolioConfig, MetricsConfig, DEFAULT_ACTIVITY_LIMIT};
pub use portfolio::{calculate, calculate_with, holding_period_return, trailing_returns};
pub use store::{InMemoryStore, JsonFileStore, PortfolioStore};

/// Error types for folio-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type for folio-core operations.
pub type Result<T> = std::result::Result<T, Error>;
