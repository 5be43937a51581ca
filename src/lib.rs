//! Swear-watching chat bot library.

pub mod bot;
pub mod config;
pub mod dict;
pub mod observability;
pub mod settings;
pub mod stats;
pub mod storage;
pub mod swears;

pub use bot::SwearBot;
pub use config::schema::BotConfig;
pub use dict::WordDict;
pub use swears::SwearFilter;
