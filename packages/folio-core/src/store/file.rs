//! JSON file portfolio store.

use super::PortfolioStore;
use crate::types::{Activity, Holding, PerformanceHistory, PortfolioSnapshot};
use crate::Result;
use chrono::Utc;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Store that reads a portfolio snapshot from a JSON file.
///
/// The file is re-read on every call, so a reseed is picked up without
/// restarting whoever holds the store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Path to the snapshot JSON file
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default path.
    pub fn at_default_path() -> Self {
        Self::new(Self::default_path())
    }

    /// Get the default data file path.
    ///
    /// Default path: `~/.folio/portfolio.json`
    /// Can be overridden with `FOLIO_DATA_FILE` environment variable.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = env::var("FOLIO_DATA_FILE") {
            return PathBuf::from(path);
        }

        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".folio/portfolio.json"))
            .unwrap_or_else(|| PathBuf::from("portfolio.json"))
    }

    /// Get the current path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the data file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the snapshot from disk. A missing file is an empty snapshot.
    pub fn load(&self) -> Result<PortfolioSnapshot> {
        if !self.path.exists() {
            tracing::debug!("No data file at {}", self.path.display());
            return Ok(PortfolioSnapshot::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let data: serde_json::Value = serde_json::from_str(&content)?;

        // Handle legacy format (list of holdings)
        if data.is_array() {
            let holdings: Vec<Holding> = serde_json::from_value(data)?;
            return Ok(PortfolioSnapshot::with_holdings(holdings));
        }

        Ok(serde_json::from_value(data)?)
    }

    /// Replace the stored data with `snapshot`.
    ///
    /// Existing contents are discarded; `updatedAt` is stamped with the
    /// current time.
    pub fn seed(&self, snapshot: &PortfolioSnapshot) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut snapshot = snapshot.clone();
        snapshot.updated_at = Some(Utc::now());

        let content = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&self.path, content)?;

        tracing::info!(
            holdings = snapshot.holdings.len(),
            activity = snapshot.activity.len(),
            "Seeded {}",
            self.path.display()
        );
        Ok(())
    }
}

impl PortfolioStore for JsonFileStore {
    fn holdings(&self) -> Result<Vec<Holding>> {
        Ok(self.load()?.holdings)
    }

    fn performance(&self) -> Result<Option<PerformanceHistory>> {
        Ok(self.load()?.performance)
    }

    fn activity(&self) -> Result<Vec<Activity>> {
        Ok(self.load()?.activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("portfolio.json"));

        assert!(!store.exists());
        assert!(store.holdings().unwrap().is_empty());
        assert!(store.performance().unwrap().is_none());
        assert!(store.activity().unwrap().is_empty());
    }

    #[test]
    fn test_seed_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/data/portfolio.json");
        let store = JsonFileStore::new(&path);

        store.seed(&PortfolioSnapshot::sample()).unwrap();
        assert!(store.exists());

        let snapshot = store.load().unwrap();
        assert_eq!(snapshot.holdings, PortfolioSnapshot::sample().holdings);
        assert_eq!(snapshot.activity.len(), 5);
        assert!(snapshot.performance.is_some());
        assert!(snapshot.updated_at.is_some());
    }

    #[test]
    fn test_seed_replaces_existing_data() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("portfolio.json"));

        store.seed(&PortfolioSnapshot::sample()).unwrap();
        let replacement = PortfolioSnapshot::with_holdings(vec![Holding::new(
            "WIPRO", "Wipro Ltd", 10.0, 450.0, 480.0, "Technology", "Large",
        )]);
        store.seed(&replacement).unwrap();

        let holdings = store.holdings().unwrap();
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].symbol, "WIPRO");
        assert!(store.activity().unwrap().is_empty());
    }

    #[test]
    fn test_legacy_array_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        fs::write(
            &path,
            r#"[{"symbol":"INFY","name":"Infosys Ltd","quantity":200,"avgPrice":1450,
                "currentPrice":1625.75,"sector":"Technology","marketCap":"Large"}]"#,
        )
        .unwrap();

        let store = JsonFileStore::new(path);
        let holdings = store.holdings().unwrap();
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].avg_price, 1450.0);
        assert!(store.performance().unwrap().is_none());
    }

    #[test]
    fn test_non_numeric_field_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        fs::write(
            &path,
            r#"{"holdings":[{"symbol":"INFY","name":"Infosys Ltd","quantity":"lots","avgPrice":1450,
                "currentPrice":1625.75,"sector":"Technology","marketCap":"Large"}]}"#,
        )
        .unwrap();

        let result = JsonFileStore::new(path).holdings();
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_recent_activity_from_file() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("portfolio.json"));
        store.seed(&PortfolioSnapshot::sample()).unwrap();

        let recent = store.recent_activity(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].symbol, "INFY");
        assert_eq!(recent[1].symbol, "RELIANCE");
    }
}
