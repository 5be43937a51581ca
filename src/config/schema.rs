//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the bot.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the bot.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BotConfig {
    /// Identity and mention handling.
    pub bot: BotIdentityConfig,

    /// Files the bot reads and writes.
    pub storage: StorageConfig,

    /// Regexes recognizing commands addressed to the bot.
    pub commands: CommandsConfig,

    /// Reply templates.
    pub responses: ResponsesConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Bot identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BotIdentityConfig {
    /// Name used in logs.
    pub name: String,

    /// Messages starting with this text are treated as mentions.
    pub mention_prefix: String,
}

impl Default for BotIdentityConfig {
    fn default() -> Self {
        Self {
            name: "swearbot".to_string(),
            mention_prefix: "@swearbot".to_string(),
        }
    }
}

/// File locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Word list, one rule per line.
    pub dictionary_path: String,

    /// Usage statistics (JSON).
    pub stats_path: String,

    /// User/channel settings (JSON).
    pub settings_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dictionary_path: "data/swears.txt".to_string(),
            stats_path: "data/stats.json".to_string(),
            settings_path: "data/settings.json".to_string(),
        }
    }
}

/// Command regexes, matched against the mention text.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// Must capture the rule in group 1.
    pub add_rule: String,
    pub curr_rank: String,
    pub prev_rank: String,
    pub total_rank: String,
    pub notify_on: String,
    pub notify_off: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            add_rule: r"(?i)^\s*add rule:\s*(\S+)\s*$".to_string(),
            curr_rank: r"(?i)^\s*curr\s+rank\s*$".to_string(),
            prev_rank: r"(?i)^\s*prev\s+rank\s*$".to_string(),
            total_rank: r"(?i)^\s*total\s+rank\s*$".to_string(),
            notify_on: r"(?i)^\s*notify\s+on\s*$".to_string(),
            notify_off: r"(?i)^\s*notify\s+off\s*$".to_string(),
        }
    }
}

/// Reply templates. `{name}` placeholders are filled in by the bot.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResponsesConfig {
    /// One swear in a list: `{index}`, `{swear}`.
    pub swear_format: String,
    /// `{count}`, `{swears}`.
    pub on_swears_found: String,
    /// `{rule}`.
    pub on_add_rule: String,
    pub on_empty_rank: String,
    pub on_notify_on: String,
    pub on_notify_off: String,
    /// `{month}`, `{monthnum}`, `{year}`.
    pub monthly_rank_header: String,
    pub total_rank_header: String,
    /// `{index}`, `{user}`, `{count}`.
    pub rank_line: String,
    pub month_names: Vec<String>,

    pub on_dict_file_read_err: String,
    pub on_add_rule_conflict_err: String,
    pub on_add_rule_save_err: String,
    pub on_invalid_wildcard_err: String,
    pub on_empty_rule_err: String,
    pub on_stats_file_read_err: String,
    pub on_stats_save_err: String,
    pub on_settings_file_read_err: String,
    pub on_settings_save_err: String,
}

impl Default for ResponsesConfig {
    fn default() -> Self {
        Self {
            swear_format: "{index}. *{swear}*".to_string(),
            on_swears_found: "{count} swears found: {swears}".to_string(),
            on_add_rule: "Rule '{rule}' added.".to_string(),
            on_empty_rank: "Rank is empty.".to_string(),
            on_notify_on: "Swear notification is on".to_string(),
            on_notify_off: "Swear notification is off".to_string(),
            monthly_rank_header: "*Monthly Rank* - {month} {year}".to_string(),
            total_rank_header: "*Total Rank*".to_string(),
            rank_line: "{index}. *{user}*: {count} swears".to_string(),
            month_names: [
                "January", "February", "March", "April", "May", "June", "July",
                "August", "September", "October", "November", "December",
            ]
            .iter()
            .map(|m| m.to_string())
            .collect(),

            on_dict_file_read_err: "Error when reading database!".to_string(),
            on_add_rule_conflict_err: "Similar rule already exists!".to_string(),
            on_add_rule_save_err: "Error when saving to database!".to_string(),
            on_invalid_wildcard_err: "Invalid wildcard placement!".to_string(),
            on_empty_rule_err: "Rule is empty!".to_string(),
            on_stats_file_read_err: "Error when reading stats file!".to_string(),
            on_stats_save_err: "Error when saving to stats file!".to_string(),
            on_settings_file_read_err: "Error when reading settings file!".to_string(),
            on_settings_save_err: "Error when saving to settings file!".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
