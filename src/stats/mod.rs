//! Swear usage statistics.
//!
//! # Data Flow
//! ```text
//! Message with swears
//!     → store.rs (read stats file, bump user count for month, write back)
//!
//! Rank command
//!     → store.rs (read stats file)
//!     → types.rs (per-month or summed ranking, descending)
//! ```
//!
//! # Design Decisions
//! - One JSON file, keyed by "<month>.<year>"
//! - Read-modify-write cycles are serialized by a mutex
//! - Ties in a ranking are ordered by user id so output is stable

pub mod store;
pub mod types;

pub use store::StatsStore;
pub use types::{AllStats, MonthStats, StatsError, StatsResult, UserStats};
