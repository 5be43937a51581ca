//! The bot: turns chat lines into replies.

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

use crate::bot::commands::{Command, CommandSet};
use crate::bot::responses;
use crate::config::{BotConfig, ResponsesConfig};
use crate::settings::{SettingsError, SettingsStore};
use crate::stats::{StatsError, StatsStore, UserStats};
use crate::swears::{SwearFilter, SwearsError};

/// Per-user, per-channel setting that enables swear list replies.
pub const NOTIFY_SETTING: &str = "swears.notify";

/// Errors the bot can hit while handling a message or starting up.
#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Swears(#[from] SwearsError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("invalid command regex: {0}")]
    Commands(#[from] regex::Error),
}

/// Swear-watching chat bot.
#[derive(Debug)]
pub struct SwearBot {
    config: BotConfig,
    commands: CommandSet,
    filter: SwearFilter,
    stats: StatsStore,
    settings: SettingsStore,
}

impl SwearBot {
    /// Assemble a bot from already opened stores.
    pub fn new(
        config: BotConfig,
        filter: SwearFilter,
        stats: StatsStore,
        settings: SettingsStore,
    ) -> Result<Self, BotError> {
        let commands = CommandSet::compile(&config.commands)?;
        Ok(Self {
            config,
            commands,
            filter,
            stats,
            settings,
        })
    }

    /// Open the dictionary, stats and settings named in `config`.
    ///
    /// An unreadable dictionary is fatal.
    pub fn from_config(config: BotConfig) -> Result<Self, BotError> {
        let storage = &config.storage;
        let filter = SwearFilter::load(&storage.dictionary_path)?;
        let stats = StatsStore::new(&storage.stats_path);
        let settings = SettingsStore::load(&storage.settings_path)?;
        Self::new(config, filter, stats, settings)
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn filter(&self) -> &SwearFilter {
        &self.filter
    }

    /// Route a chat line: mentions are commands, everything else is scanned.
    pub fn handle(&self, text: &str, user_id: &str, channel_id: &str) -> Option<String> {
        match self.strip_mention(text) {
            Some(command) => self.process_mention(command, user_id, channel_id),
            None => self.process_message(text, user_id, channel_id),
        }
    }

    /// Text after the mention prefix, if `text` is addressed to the bot.
    pub fn strip_mention<'a>(&self, text: &'a str) -> Option<&'a str> {
        let prefix = self.config.bot.mention_prefix.as_str();
        if prefix.is_empty() {
            return None;
        }
        let rest = text.trim_start().strip_prefix(prefix)?;
        match rest.chars().next() {
            None => Some(rest),
            Some(c) if c.is_whitespace() || c == ':' || c == ',' => {
                Some(rest.trim_start_matches([':', ',']))
            }
            // "@swearbotfan" is not addressed to "@swearbot".
            Some(_) => None,
        }
    }

    pub fn process_mention(&self, text: &str, user_id: &str, channel_id: &str) -> Option<String> {
        self.process_mention_on(text, user_id, channel_id, Local::now().date_naive())
    }

    /// Run the command in `text` as if it were `today`.
    pub fn process_mention_on(
        &self,
        text: &str,
        user_id: &str,
        channel_id: &str,
        today: NaiveDate,
    ) -> Option<String> {
        let command = self.commands.parse(text)?;
        tracing::debug!(user = %user_id, channel = %channel_id, ?command, "Command received");

        let reply = match command {
            Command::CurrRank => self.monthly_rank(today),
            Command::PrevRank => {
                let last_month = today.with_day(1).and_then(|d| d.pred_opt()).unwrap_or(today);
                self.monthly_rank(last_month)
            }
            Command::TotalRank => self.total_rank(),
            Command::AddRule(rule) => self
                .filter
                .add_rule(&rule)
                .map(|rule| responses::format_add_rule(&self.config.responses, &rule))
                .map_err(BotError::from),
            Command::NotifyOn => self.set_notify(user_id, channel_id, true),
            Command::NotifyOff => self.set_notify(user_id, channel_id, false),
        };
        Some(reply.unwrap_or_else(|e| self.error_response(&e)))
    }

    pub fn process_message(&self, text: &str, user_id: &str, channel_id: &str) -> Option<String> {
        self.process_message_on(text, user_id, channel_id, Local::now().date_naive())
    }

    /// Count swears in `text` for `today` and reply if the user asked to be notified.
    pub fn process_message_on(
        &self,
        text: &str,
        user_id: &str,
        channel_id: &str,
        today: NaiveDate,
    ) -> Option<String> {
        let swears = self.filter.find_swears(text);
        if swears.is_empty() {
            return None;
        }
        tracing::debug!(user = %user_id, channel = %channel_id, count = swears.len(), "Swears found");

        if let Err(e) =
            self.stats
                .add_swear_count(today.month(), today.year(), user_id, swears.len() as u64)
        {
            return Some(self.error_response(&BotError::from(e)));
        }

        let notify = self.settings.user_channel(user_id, channel_id, NOTIFY_SETTING);
        if notify.as_deref() == Some("on") {
            return Some(responses::format_swears(&self.config.responses, &swears));
        }
        None
    }

    fn monthly_rank(&self, date: NaiveDate) -> Result<String, BotError> {
        let (month, year) = (date.month(), date.year());
        let rank = self.stats.monthly_rank(month, year)?;
        Ok(self.format_rank(&rank, |config, rank| {
            responses::format_monthly_rank(config, month, year, rank)
        }))
    }

    fn total_rank(&self) -> Result<String, BotError> {
        let rank = self.stats.total_rank()?;
        Ok(self.format_rank(&rank, responses::format_total_rank))
    }

    fn format_rank(
        &self,
        rank: &[UserStats],
        format: impl FnOnce(&ResponsesConfig, &[UserStats]) -> String,
    ) -> String {
        if rank.is_empty() {
            return self.config.responses.on_empty_rank.clone();
        }
        format(&self.config.responses, rank)
    }

    fn set_notify(&self, user_id: &str, channel_id: &str, on: bool) -> Result<String, BotError> {
        let value = if on { "on" } else { "off" };
        self.settings
            .set_user_channel(user_id, channel_id, NOTIFY_SETTING, value);
        self.settings.save()?;
        tracing::info!(user = %user_id, channel = %channel_id, notify = value, "Notify setting changed");

        let responses = &self.config.responses;
        Ok(if on {
            responses.on_notify_on.clone()
        } else {
            responses.on_notify_off.clone()
        })
    }

    /// User-facing text for `err`.
    pub fn error_response(&self, err: &BotError) -> String {
        let responses = &self.config.responses;
        let text = match err {
            BotError::Swears(SwearsError::DictFileRead { .. }) => &responses.on_dict_file_read_err,
            BotError::Swears(SwearsError::EmptyRule) => &responses.on_empty_rule_err,
            BotError::Swears(SwearsError::InvalidWildcard { .. }) => {
                &responses.on_invalid_wildcard_err
            }
            BotError::Swears(SwearsError::AddRuleConflict { .. }) => {
                &responses.on_add_rule_conflict_err
            }
            BotError::Swears(SwearsError::AddRuleSave { .. }) => &responses.on_add_rule_save_err,
            BotError::Stats(StatsError::Read { .. }) => &responses.on_stats_file_read_err,
            BotError::Stats(StatsError::Save { .. }) => &responses.on_stats_save_err,
            BotError::Settings(SettingsError::Read { .. }) => &responses.on_settings_file_read_err,
            BotError::Settings(SettingsError::Save { .. }) => &responses.on_settings_save_err,
            BotError::Commands(e) => {
                tracing::error!(error = %e, "No response for command error");
                return format!("Error: {}", e);
            }
        };
        text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn bot_in(dir: &Path, rules: &str) -> SwearBot {
        let dict_path = dir.join("swears.txt");
        std::fs::write(&dict_path, rules).unwrap();

        let mut config = BotConfig::default();
        config.storage.dictionary_path = dict_path.to_string_lossy().into_owned();
        config.storage.stats_path = dir.join("stats.json").to_string_lossy().into_owned();
        config.storage.settings_path = dir.join("settings.json").to_string_lossy().into_owned();
        SwearBot::from_config(config).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_strip_mention() {
        let dir = tempfile::tempdir().unwrap();
        let bot = bot_in(dir.path(), "a\n");

        assert_eq!(bot.strip_mention("@swearbot: curr rank"), Some(" curr rank"));
        assert_eq!(bot.strip_mention("  @swearbot total rank"), Some(" total rank"));
        assert_eq!(bot.strip_mention("hello @swearbot"), None);
        assert_eq!(bot.strip_mention("@swearbot"), Some(""));
        assert_eq!(bot.strip_mention("@swearbot,notify on"), Some("notify on"));
        assert_eq!(bot.strip_mention("@swearbotfan abc"), None);
    }

    #[test]
    fn test_prefix_lookalike_is_scanned() {
        let dir = tempfile::tempdir().unwrap();
        let bot = bot_in(dir.path(), "abc\n");
        let today = date(2024, 3, 15);

        bot.process_mention_on("notify on", "u1", "c1", today);
        assert_eq!(
            bot.handle("@swearbotfan abc", "u1", "c1").as_deref(),
            Some("1 swears found: 1. *abc*")
        );
    }

    #[test]
    fn test_empty_rule_reply() {
        let dir = tempfile::tempdir().unwrap();
        let bot = bot_in(dir.path(), "abc\n");
        let err = BotError::from(bot.filter().add_rule("  ").unwrap_err());
        assert_eq!(bot.error_response(&err), "Rule is empty!");
    }

    #[test]
    fn test_message_silent_without_notify() {
        let dir = tempfile::tempdir().unwrap();
        let bot = bot_in(dir.path(), "abc*\n");
        let today = date(2024, 3, 15);

        assert_eq!(bot.process_message_on("ABCD efg", "u1", "c1", today), None);
        assert_eq!(bot.process_message_on("clean words", "u1", "c1", today), None);

        let reply = bot.process_mention_on("curr rank", "u1", "c1", today).unwrap();
        assert_eq!(reply, "*Monthly Rank* - March 2024\n1. *u1*: 1 swears");
    }

    #[test]
    fn test_notify_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let bot = bot_in(dir.path(), "abc*\nxyz\n");
        let today = date(2024, 3, 15);

        assert_eq!(
            bot.process_mention_on("notify on", "u1", "c1", today).as_deref(),
            Some("Swear notification is on")
        );
        assert_eq!(
            bot.process_message_on("abc and XYZ", "u1", "c1", today).as_deref(),
            Some("2 swears found: 1. *abc*, 2. *xyz*")
        );
        // Only for that channel.
        assert_eq!(bot.process_message_on("abc", "u1", "c2", today), None);

        bot.process_mention_on("notify off", "u1", "c1", today);
        assert_eq!(bot.process_message_on("abc", "u1", "c1", today), None);
    }

    #[test]
    fn test_ranks() {
        let dir = tempfile::tempdir().unwrap();
        let bot = bot_in(dir.path(), "abc*\n");

        bot.process_message_on("abc abc", "u1", "c1", date(2024, 1, 31));
        bot.process_message_on("abc abc abc", "u2", "c1", date(2024, 2, 1));
        bot.process_message_on("abcd", "u1", "c1", date(2024, 2, 2));

        let feb = date(2024, 2, 10);
        assert_eq!(
            bot.process_mention_on("prev rank", "u1", "c1", feb).as_deref(),
            Some("*Monthly Rank* - January 2024\n1. *u1*: 2 swears")
        );
        assert_eq!(
            bot.process_mention_on("curr rank", "u1", "c1", feb).as_deref(),
            Some("*Monthly Rank* - February 2024\n1. *u2*: 3 swears\n2. *u1*: 1 swears")
        );
        assert_eq!(
            bot.process_mention_on("total rank", "u1", "c1", feb).as_deref(),
            Some("*Total Rank*\n1. *u1*: 3 swears\n2. *u2*: 3 swears")
        );
        assert_eq!(
            bot.process_mention_on("curr rank", "u1", "c1", date(2024, 5, 1)).as_deref(),
            Some("Rank is empty.")
        );
    }

    #[test]
    fn test_prev_rank_wraps_year() {
        let dir = tempfile::tempdir().unwrap();
        let bot = bot_in(dir.path(), "abc\n");

        bot.process_message_on("abc", "u1", "c1", date(2023, 12, 24));
        assert_eq!(
            bot.process_mention_on("prev rank", "u1", "c1", date(2024, 1, 1)).as_deref(),
            Some("*Monthly Rank* - December 2023\n1. *u1*: 1 swears")
        );
    }

    #[test]
    fn test_add_rule_replies() {
        let dir = tempfile::tempdir().unwrap();
        let bot = bot_in(dir.path(), "abc\n");
        let today = date(2024, 3, 15);

        assert_eq!(
            bot.process_mention_on("add rule: Fgh*", "u1", "c1", today).as_deref(),
            Some("Rule 'fgh*' added.")
        );
        assert_eq!(
            bot.process_mention_on("add rule: fghij", "u1", "c1", today).as_deref(),
            Some("Similar rule already exists!")
        );
        assert_eq!(
            bot.process_mention_on("add rule: a*b", "u1", "c1", today).as_deref(),
            Some("Invalid wildcard placement!")
        );
        assert!(bot.filter().is_swear("fghx"));
    }

    #[test]
    fn test_unknown_mention() {
        let dir = tempfile::tempdir().unwrap();
        let bot = bot_in(dir.path(), "abc\n");
        assert_eq!(bot.process_mention_on("sing a song", "u1", "c1", date(2024, 1, 1)), None);
    }

    #[test]
    fn test_stats_error_reply() {
        let dir = tempfile::tempdir().unwrap();
        let bot = bot_in(dir.path(), "abc\n");
        std::fs::write(dir.path().join("stats.json"), "garbage").unwrap();

        assert_eq!(
            bot.process_message_on("abc", "u1", "c1", date(2024, 1, 1)).as_deref(),
            Some("Error when reading stats file!")
        );
    }

    #[test]
    fn test_missing_dictionary_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = BotConfig::default();
        config.storage.dictionary_path = dir.path().join("none.txt").to_string_lossy().into_owned();
        config.storage.stats_path = dir.path().join("stats.json").to_string_lossy().into_owned();
        config.storage.settings_path = dir.path().join("settings.json").to_string_lossy().into_owned();

        let err = SwearBot::from_config(config).unwrap_err();
        assert!(matches!(err, BotError::Swears(SwearsError::DictFileRead { .. })));
    }
}
