//! Portfolio storage.
//!
//! The calculator never reads storage itself; callers fetch holdings through
//! a [`PortfolioStore`] and hand them over.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use crate::types::{Activity, Holding, PerformanceHistory};
use crate::Result;

/// Source of holdings, performance history and trade activity.
pub trait PortfolioStore: Send + Sync {
    /// All stored holdings, in stored order.
    fn holdings(&self) -> Result<Vec<Holding>>;

    /// Stored performance history, if any.
    fn performance(&self) -> Result<Option<PerformanceHistory>>;

    /// All stored trades, in stored order.
    fn activity(&self) -> Result<Vec<Activity>>;

    /// The `limit` most recent trades, newest first.
    fn recent_activity(&self, limit: usize) -> Result<Vec<Activity>> {
        let mut activity = self.activity()?;
        activity.sort_by(|a, b| b.date.cmp(&a.date));
        activity.truncate(limit);
        Ok(activity)
    }
}
