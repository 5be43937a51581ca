//! JSON-backed settings store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

use crate::storage::json;

type Values = BTreeMap<String, String>;

/// Settings of a single user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Per-channel overrides for this user.
    pub channels: BTreeMap<String, Values>,
    pub settings: Values,
}

/// Everything in the settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AllSettings {
    pub users: BTreeMap<String, UserSettings>,
    pub channels: BTreeMap<String, Values>,
    pub settings: Values,
}

impl AllSettings {
    pub fn user_channel(&self, user_id: &str, channel_id: &str, key: &str) -> Option<&str> {
        self.users
            .get(user_id)?
            .channels
            .get(channel_id)?
            .get(key)
            .map(String::as_str)
    }

    pub fn user(&self, user_id: &str, key: &str) -> Option<&str> {
        self.users.get(user_id)?.settings.get(key).map(String::as_str)
    }

    pub fn channel(&self, channel_id: &str, key: &str) -> Option<&str> {
        self.channels.get(channel_id)?.get(key).map(String::as_str)
    }

    pub fn global(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    pub fn set_user_channel(&mut self, user_id: &str, channel_id: &str, key: &str, value: &str) {
        self.users
            .entry(user_id.to_string())
            .or_default()
            .channels
            .entry(channel_id.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    pub fn set_user(&mut self, user_id: &str, key: &str, value: &str) {
        self.users
            .entry(user_id.to_string())
            .or_default()
            .settings
            .insert(key.to_string(), value.to_string());
    }

    pub fn set_channel(&mut self, channel_id: &str, key: &str, value: &str) {
        self.channels
            .entry(channel_id.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    pub fn set_global(&mut self, key: &str, value: &str) {
        self.settings.insert(key.to_string(), value.to_string());
    }
}

/// Errors from the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot save settings file {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Settings held in memory and written back on [`save`](Self::save).
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    inner: Mutex<AllSettings>,
}

impl SettingsStore {
    /// Load settings from `path`, creating an empty file if it is missing.
    pub fn load(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        let settings = json::load_or_create(&path).map_err(|source| {
            tracing::error!(path = ?path, error = %source, "Cannot read settings");
            SettingsError::Read {
                path: path.clone(),
                source,
            }
        })?;
        Ok(Self {
            path,
            inner: Mutex::new(settings),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `f` against a consistent view of the settings.
    pub fn with<R>(&self, f: impl FnOnce(&AllSettings) -> R) -> R {
        let guard = self.inner.lock().expect("settings mutex poisoned");
        f(&*guard)
    }

    /// Apply `f` to the settings. Changes stay in memory until saved.
    pub fn update<R>(&self, f: impl FnOnce(&mut AllSettings) -> R) -> R {
        let mut guard = self.inner.lock().expect("settings mutex poisoned");
        f(&mut *guard)
    }

    pub fn user_channel(&self, user_id: &str, channel_id: &str, key: &str) -> Option<String> {
        self.with(|s| s.user_channel(user_id, channel_id, key).map(str::to_string))
    }

    pub fn set_user_channel(&self, user_id: &str, channel_id: &str, key: &str, value: &str) {
        self.update(|s| s.set_user_channel(user_id, channel_id, key, value));
    }

    /// Write the current settings to disk.
    pub fn save(&self) -> SettingsResult<()> {
        let inner = self.inner.lock().expect("settings mutex poisoned");
        json::save(&self.path, &*inner).map_err(|source| {
            tracing::error!(path = ?self.path, error = %source, "Cannot write settings");
            SettingsError::Save {
                path: self.path.clone(),
                source,
            }
        })
    }
}
