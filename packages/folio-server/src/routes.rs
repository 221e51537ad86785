//! Route definitions.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::handlers::{self, AppState};

/// Create the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Portfolio
        .route("/api/portfolio/summary", get(handlers::summary))
        .route("/api/portfolio/holdings", get(handlers::holdings))
        .route("/api/portfolio/allocation", get(handlers::allocation))
        .route("/api/portfolio/performance", get(handlers::performance))
        .route("/api/portfolio/activity", get(handlers::activity))
        .with_state(state)
}
