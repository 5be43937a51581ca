//! Message handling.
//!
//! # Data Flow
//! ```text
//! Chat line (user, channel, text)
//!     → handler.rs (mention or plain message?)
//!
//! Plain message:
//!     → swears::SwearFilter (find swears)
//!     → stats::StatsStore (count them for this month)
//!     → settings (notify on?) → responses.rs (swear list reply)
//!
//! Mention:
//!     → commands.rs (regex command recognition)
//!     → rank / add rule / notify toggle
//!     → responses.rs (templated reply)
//! ```
//!
//! # Design Decisions
//! - Errors never escape a handled message; they become configured replies
//! - The current date is injectable so ranks are testable

pub mod commands;
pub mod handler;
pub mod responses;

pub use commands::{Command, CommandSet};
pub use handler::{BotError, SwearBot, NOTIFY_SETTING};
