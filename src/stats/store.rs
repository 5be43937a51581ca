//! File-backed statistics store.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::stats::types::{AllStats, StatsError, StatsResult, UserStats};
use crate::storage::json;

/// Stats persisted to a JSON file; every call goes to disk.
#[derive(Debug)]
pub struct StatsStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl StatsStore {
    /// Create a store over `path`. The file is created on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add `count` swears for `user_id` in the given month and persist.
    pub fn add_swear_count(
        &self,
        month: u32,
        year: i32,
        user_id: &str,
        count: u64,
    ) -> StatsResult<()> {
        let _guard = self.lock.lock().expect("stats mutex poisoned");
        let mut stats = self.read()?;
        stats.add_swear_count(month, year, user_id, count);
        self.write(&stats)?;
        tracing::debug!(user = %user_id, count, month, year, "Swear count recorded");
        Ok(())
    }

    /// Ranking for one month.
    pub fn monthly_rank(&self, month: u32, year: i32) -> StatsResult<Vec<UserStats>> {
        let _guard = self.lock.lock().expect("stats mutex poisoned");
        Ok(self.read()?.monthly_rank(month, year))
    }

    /// Ranking over all recorded months.
    pub fn total_rank(&self) -> StatsResult<Vec<UserStats>> {
        let _guard = self.lock.lock().expect("stats mutex poisoned");
        Ok(self.read()?.total_rank())
    }

    fn read(&self) -> StatsResult<AllStats> {
        json::load_or_create(&self.path).map_err(|source| {
            tracing::error!(path = ?self.path, error = %source, "Cannot read stats");
            StatsError::Read {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn write(&self, stats: &AllStats) -> StatsResult<()> {
        json::save(&self.path, stats).map_err(|source| {
            tracing::error!(path = ?self.path, error = %source, "Cannot write stats");
            StatsError::Save {
                path: self.path.clone(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");

        let store = StatsStore::new(&path);
        store.add_swear_count(5, 2024, "alice", 2).unwrap();
        store.add_swear_count(5, 2024, "bob", 3).unwrap();
        store.add_swear_count(6, 2024, "alice", 4).unwrap();

        let reopened = StatsStore::new(&path);
        let rank = reopened.monthly_rank(5, 2024).unwrap();
        assert_eq!(rank[0].user_id, "bob");
        assert_eq!(rank[1].swear_count, 2);

        let total = reopened.total_rank().unwrap();
        assert_eq!(total[0].user_id, "alice");
        assert_eq!(total[0].swear_count, 6);
    }

    #[test]
    fn test_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path().join("stats.json"));

        assert!(store.total_rank().unwrap().is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, "{ broken").unwrap();

        let store = StatsStore::new(&path);
        assert!(matches!(store.total_rank(), Err(StatsError::Read { .. })));
        assert!(matches!(
            store.add_swear_count(1, 2024, "alice", 1),
            Err(StatsError::Read { .. })
        ));
    }
}
