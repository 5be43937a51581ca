//! Command recognition for mentions.

use regex::Regex;

use crate::config::CommandsConfig;

/// A command addressed to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CurrRank,
    PrevRank,
    TotalRank,
    AddRule(String),
    NotifyOn,
    NotifyOff,
}

/// Compiled command regexes.
#[derive(Debug, Clone)]
pub struct CommandSet {
    curr_rank: Regex,
    prev_rank: Regex,
    total_rank: Regex,
    add_rule: Regex,
    notify_on: Regex,
    notify_off: Regex,
}

impl CommandSet {
    pub fn compile(config: &CommandsConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            curr_rank: Regex::new(&config.curr_rank)?,
            prev_rank: Regex::new(&config.prev_rank)?,
            total_rank: Regex::new(&config.total_rank)?,
            add_rule: Regex::new(&config.add_rule)?,
            notify_on: Regex::new(&config.notify_on)?,
            notify_off: Regex::new(&config.notify_off)?,
        })
    }

    /// Recognize `text`. First matching command wins.
    pub fn parse(&self, text: &str) -> Option<Command> {
        if self.curr_rank.is_match(text) {
            return Some(Command::CurrRank);
        }
        if self.prev_rank.is_match(text) {
            return Some(Command::PrevRank);
        }
        if self.total_rank.is_match(text) {
            return Some(Command::TotalRank);
        }
        if let Some(rule) = self.add_rule.captures(text).and_then(|c| c.get(1)) {
            return Some(Command::AddRule(rule.as_str().to_string()));
        }
        if self.notify_on.is_match(text) {
            return Some(Command::NotifyOn);
        }
        if self.notify_off.is_match(text) {
            return Some(Command::NotifyOff);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands() -> CommandSet {
        CommandSet::compile(&CommandsConfig::default()).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        let commands = commands();
        assert_eq!(commands.parse("curr rank"), Some(Command::CurrRank));
        assert_eq!(commands.parse("  PREV   Rank "), Some(Command::PrevRank));
        assert_eq!(commands.parse("total rank"), Some(Command::TotalRank));
        assert_eq!(commands.parse("notify on"), Some(Command::NotifyOn));
        assert_eq!(commands.parse("Notify Off"), Some(Command::NotifyOff));
        assert_eq!(commands.parse("hello there"), None);
        assert_eq!(commands.parse("curr rank please"), None);
    }

    #[test]
    fn test_parse_add_rule() {
        let commands = commands();
        assert_eq!(
            commands.parse("add rule: Fgh*"),
            Some(Command::AddRule("Fgh*".into()))
        );
        assert_eq!(
            commands.parse(" ADD RULE:   ταБЬ* "),
            Some(Command::AddRule("ταБЬ*".into()))
        );
        assert_eq!(commands.parse("add rule:"), None);
        assert_eq!(commands.parse("add rule: two words"), None);
    }

    #[test]
    fn test_compile_error() {
        let mut config = CommandsConfig::default();
        config.notify_on = "[".into();
        assert!(CommandSet::compile(&config).is_err());
    }
}
