//! Shared utilities for integration tests.

use std::path::Path;
use tempfile::TempDir;

use swearbot::{BotConfig, SwearBot};

/// A bot whose files live in a scratch directory.
pub struct TestBot {
    pub bot: SwearBot,
    pub dir: TempDir,
}

/// Write `rules` as a word list and start a bot over it.
pub fn start_bot(rules: &[&str]) -> TestBot {
    let dir = tempfile::tempdir().unwrap();
    write_rules(&dir.path().join("swears.txt"), rules);
    let bot = SwearBot::from_config(config_in(dir.path())).unwrap();
    TestBot { bot, dir }
}

/// Default config with every storage path inside `dir`.
pub fn config_in(dir: &Path) -> BotConfig {
    let mut config = BotConfig::default();
    config.storage.dictionary_path = path_string(&dir.join("swears.txt"));
    config.storage.stats_path = path_string(&dir.join("stats.json"));
    config.storage.settings_path = path_string(&dir.join("settings.json"));
    config
}

pub fn write_rules(path: &Path, rules: &[&str]) {
    let mut content = rules.join("\n");
    content.push('\n');
    std::fs::write(path, content).unwrap();
}

#[allow(dead_code)]
pub fn read_rules(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
