//! Reply formatting.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::config::ResponsesConfig;
use crate::stats::UserStats;

fn placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{([a-zA-Z0-9]+)\}").expect("placeholder regex is valid"))
}

/// Replace `{name}` placeholders with values from `params`.
///
/// Unknown placeholders are left as they are.
pub fn param_format(format: &str, params: &[(&str, &str)]) -> String {
    placeholder()
        .replace_all(format, |caps: &Captures| {
            let name = &caps[1];
            params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// "N swears found: 1. *a*, 2. *b*"
pub fn format_swears(config: &ResponsesConfig, swears: &[String]) -> String {
    let list = swears
        .iter()
        .enumerate()
        .map(|(i, swear)| {
            let index = (i + 1).to_string();
            param_format(&config.swear_format, &[("swear", swear.as_str()), ("index", index.as_str())])
        })
        .collect::<Vec<_>>()
        .join(", ");
    let count = swears.len().to_string();
    param_format(
        &config.on_swears_found,
        &[("swears", list.as_str()), ("count", count.as_str())],
    )
}

pub fn format_add_rule(config: &ResponsesConfig, rule: &str) -> String {
    param_format(&config.on_add_rule, &[("rule", rule)])
}

/// Header line followed by one line per ranked user.
pub fn format_monthly_rank(
    config: &ResponsesConfig,
    month: u32,
    year: i32,
    rank: &[UserStats],
) -> String {
    let monthnum = month.to_string();
    let name = (month as usize)
        .checked_sub(1)
        .and_then(|i| config.month_names.get(i))
        .map(String::as_str)
        .unwrap_or(monthnum.as_str());
    let year = year.to_string();
    let header = param_format(
        &config.monthly_rank_header,
        &[("month", name), ("monthnum", monthnum.as_str()), ("year", year.as_str())],
    );
    format!("{}\n{}", header, format_rank_lines(config, rank))
}

pub fn format_total_rank(config: &ResponsesConfig, rank: &[UserStats]) -> String {
    format!("{}\n{}", config.total_rank_header, format_rank_lines(config, rank))
}

fn format_rank_lines(config: &ResponsesConfig, rank: &[UserStats]) -> String {
    rank.iter()
        .enumerate()
        .map(|(i, user)| {
            let index = (i + 1).to_string();
            let count = user.swear_count.to_string();
            param_format(
                &config.rank_line,
                &[
                    ("index", index.as_str()),
                    ("user", user.user_id.as_str()),
                    ("count", count.as_str()),
                ],
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(user_id: &str, swear_count: u64) -> UserStats {
        UserStats {
            user_id: user_id.to_string(),
            swear_count,
        }
    }

    #[test]
    fn test_param_format() {
        assert_eq!(
            param_format("{a} and {b} and {a}", &[("a", "x"), ("b", "y")]),
            "x and y and x"
        );
        assert_eq!(param_format("{missing} {a}", &[("a", "1")]), "{missing} 1");
        assert_eq!(param_format("{not a param}", &[]), "{not a param}");
        assert_eq!(param_format("{a}", &[("a", "{b}"), ("b", "no")]), "{b}");
    }

    #[test]
    fn test_format_swears() {
        let config = ResponsesConfig::default();
        let swears = vec!["abc".to_string(), "xyz".to_string()];
        assert_eq!(
            format_swears(&config, &swears),
            "2 swears found: 1. *abc*, 2. *xyz*"
        );
    }

    #[test]
    fn test_format_monthly_rank() {
        let config = ResponsesConfig::default();
        let rank = vec![user("bob", 5), user("alice", 3)];
        assert_eq!(
            format_monthly_rank(&config, 2, 2024, &rank),
            "*Monthly Rank* - February 2024\n1. *bob*: 5 swears\n2. *alice*: 3 swears"
        );
    }

    #[test]
    fn test_format_total_rank() {
        let config = ResponsesConfig::default();
        assert_eq!(
            format_total_rank(&config, &[user("carol", 1)]),
            "*Total Rank*\n1. *carol*: 1 swears"
        );
    }

    #[test]
    fn test_format_add_rule() {
        let config = ResponsesConfig::default();
        assert_eq!(format_add_rule(&config, "fgh*"), "Rule 'fgh*' added.");
    }
}
