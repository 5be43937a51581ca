//! Persistent key/value settings.
//!
//! Settings live at four scopes: global, per user, per channel and per
//! user within a channel. Values are plain strings; the bot stores its
//! `notify` toggle here.

pub mod store;

pub use store::{AllSettings, SettingsError, SettingsResult, SettingsStore};
