//! Forbidden word detection.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     word list file (one rule per line)
//!     → filter.rs (normalize, insert, log & skip conflicts)
//!     → WordDict behind RwLock
//!
//! Incoming message:
//!     → filter.rs (split on whitespace, normalize, match)
//!     → Return: swears in message order
//!
//! "add rule" command:
//!     → filter.rs (normalize, insert, append to word list)
//! ```
//!
//! # Design Decisions
//! - Normalization (trim, lowercase) happens here, not in the dictionary
//! - A bad line never aborts loading; an unreadable file does
//! - Rules are persisted only after the dictionary accepted them

pub mod filter;
pub mod types;

pub use filter::{normalize_word, SwearFilter};
pub use types::{SwearsError, SwearsResult};
