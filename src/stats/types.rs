//! Statistics data model and error definitions.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use thiserror::Error;

/// Swear count of one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub user_id: String,
    pub swear_count: u64,
}

/// Counts for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthStats {
    pub year: i32,
    pub month: u32,
    pub users: Vec<UserStats>,
}

/// Everything in the stats file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AllStats {
    pub months: BTreeMap<String, MonthStats>,
}

impl AllStats {
    /// Add `count` swears to `user_id` for the given month.
    pub fn add_swear_count(&mut self, month: u32, year: i32, user_id: &str, count: u64) {
        let month_stats = self
            .months
            .entry(month_key(month, year))
            .or_insert_with(|| MonthStats {
                year,
                month,
                users: Vec::new(),
            });

        match month_stats.users.iter_mut().find(|u| u.user_id == user_id) {
            Some(user) => user.swear_count += count,
            None => month_stats.users.push(UserStats {
                user_id: user_id.to_string(),
                swear_count: count,
            }),
        }
    }

    /// Users of one month, most swears first.
    pub fn monthly_rank(&self, month: u32, year: i32) -> Vec<UserStats> {
        let mut rank = self
            .months
            .get(&month_key(month, year))
            .map(|m| m.users.clone())
            .unwrap_or_default();
        sort_rank(&mut rank);
        rank
    }

    /// Users summed over all months, most swears first.
    pub fn total_rank(&self) -> Vec<UserStats> {
        let mut totals: HashMap<&str, u64> = HashMap::new();
        for user in self.months.values().flat_map(|m| &m.users) {
            *totals.entry(user.user_id.as_str()).or_default() += user.swear_count;
        }

        let mut rank: Vec<UserStats> = totals
            .into_iter()
            .map(|(user_id, swear_count)| UserStats {
                user_id: user_id.to_string(),
                swear_count,
            })
            .collect();
        sort_rank(&mut rank);
        rank
    }
}

fn month_key(month: u32, year: i32) -> String {
    format!("{}.{}", month, year)
}

fn sort_rank(rank: &mut [UserStats]) {
    rank.sort_by(|a, b| {
        b.swear_count
            .cmp(&a.swear_count)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
}

/// Errors from the stats file.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("cannot read stats file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot save stats file {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for stats operations.
pub type StatsResult<T> = Result<T, StatsError>;
