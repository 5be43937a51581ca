//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that every command regex compiles
//! - Check value ranges (month names, log level, paths)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BotConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use regex::Regex;
use thiserror::Error;

use crate::config::schema::BotConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("commands.{field}: invalid regex: {reason}")]
    InvalidRegex { field: &'static str, reason: String },

    #[error("commands.add_rule: regex must capture the rule in group 1")]
    MissingRuleCapture,

    #[error("responses.month_names: expected 12 names, got {0}")]
    MonthNames(usize),

    #[error("storage.{0}: path must not be empty")]
    EmptyPath(&'static str),

    #[error("observability.log_level: unknown level '{0}'")]
    LogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &BotConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let commands = &config.commands;
    let patterns = [
        ("add_rule", &commands.add_rule),
        ("curr_rank", &commands.curr_rank),
        ("prev_rank", &commands.prev_rank),
        ("total_rank", &commands.total_rank),
        ("notify_on", &commands.notify_on),
        ("notify_off", &commands.notify_off),
    ];
    for (field, pattern) in patterns {
        match Regex::new(pattern) {
            Ok(re) => {
                if field == "add_rule" && re.captures_len() < 2 {
                    errors.push(ValidationError::MissingRuleCapture);
                }
            }
            Err(e) => errors.push(ValidationError::InvalidRegex {
                field,
                reason: e.to_string(),
            }),
        }
    }

    let months = config.responses.month_names.len();
    if months != 12 {
        errors.push(ValidationError::MonthNames(months));
    }

    let storage = &config.storage;
    for (field, path) in [
        ("dictionary_path", &storage.dictionary_path),
        ("stats_path", &storage.stats_path),
        ("settings_path", &storage.settings_path),
    ] {
        if path.trim().is_empty() {
            errors.push(ValidationError::EmptyPath(field));
        }
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
