//! Request handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use folio_core::{
    calculate_with, Activity, Allocation, EnhancedHolding, Error, MetricsConfig,
    PerformanceHistory, PortfolioMetrics, PortfolioStore, PortfolioSummary,
};

/// Application state.
pub struct AppState {
    /// Source of holdings, performance and activity
    pub store: Arc<dyn PortfolioStore>,
    /// Summary placeholder values
    pub metrics: MetricsConfig,
    /// Number of trades returned by the activity endpoint
    pub activity_limit: usize,
}

impl AppState {
    /// Run a store call on the blocking pool. File-backed stores read from disk.
    async fn read<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn PortfolioStore) -> folio_core::Result<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let result = tokio::task::spawn_blocking(move || f(store.as_ref()))
            .await
            .map_err(|e| Error::Io(std::io::Error::other(e)))?;
        Ok(result?)
    }

    async fn calculate(&self) -> Result<PortfolioMetrics, ApiError> {
        let config = self.metrics.clone();
        self.read(move |store| calculate_with(&store.holdings()?, &config))
            .await
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
    message: String,
}

/// A core error rendered as a JSON response.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Io(_) | Error::Json(_) | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        } else {
            tracing::warn!("Request rejected: {}", self.0);
        }

        let body = ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Plain-text liveness message.
pub async fn root() -> &'static str {
    "Folio portfolio backend is running"
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Portfolio summary.
pub async fn summary(State(state): State<Arc<AppState>>) -> Result<Json<PortfolioSummary>, ApiError> {
    Ok(Json(state.calculate().await?.summary))
}

/// Holdings with derived value and gain/loss.
pub async fn holdings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EnhancedHolding>>, ApiError> {
    Ok(Json(state.calculate().await?.holdings))
}

/// Allocation by sector and market cap.
pub async fn allocation(State(state): State<Arc<AppState>>) -> Result<Json<Allocation>, ApiError> {
    Ok(Json(state.calculate().await?.allocation))
}

/// Performance timeline with trailing returns.
pub async fn performance(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PerformanceHistory>, ApiError> {
    let history = state
        .read(|store| store.performance())
        .await?
        .ok_or_else(|| Error::NotFound("no performance history recorded".to_string()))?;
    Ok(Json(history.resolved()))
}

/// Most recent trades, newest first.
pub async fn activity(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Activity>>, ApiError> {
    let limit = state.activity_limit;
    Ok(Json(state.read(move |store| store.recent_activity(limit)).await?))
}
