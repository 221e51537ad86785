//! In-memory portfolio store.

use super::PortfolioStore;
use crate::types::{Activity, Holding, PerformanceHistory, PortfolioSnapshot};
use crate::Result;

/// Store backed by a snapshot held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    snapshot: PortfolioSnapshot,
}

impl InMemoryStore {
    /// Create a store serving the given snapshot.
    pub fn new(snapshot: PortfolioSnapshot) -> Self {
        Self { snapshot }
    }

    /// Create a store serving the bundled sample dataset.
    pub fn sample() -> Self {
        Self::new(PortfolioSnapshot::sample())
    }

    /// Get the underlying snapshot.
    pub fn snapshot(&self) -> &PortfolioSnapshot {
        &self.snapshot
    }
}

impl PortfolioStore for InMemoryStore {
    fn holdings(&self) -> Result<Vec<Holding>> {
        Ok(self.snapshot.holdings.clone())
    }

    fn performance(&self) -> Result<Option<PerformanceHistory>> {
        Ok(self.snapshot.performance.clone())
    }

    fn activity(&self) -> Result<Vec<Activity>> {
        Ok(self.snapshot.activity.clone())
    }
}
