//! Word list loading, message scanning and runtime rule additions.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::dict::{DictError, WordDict};
use crate::swears::types::{SwearsError, SwearsResult};

/// Normalize a word list line or message token: trim whitespace and lowercase.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Dictionary of forbidden words backed by a word list file.
///
/// Matches take a shared lock; rule additions take the write lock.
#[derive(Debug)]
pub struct SwearFilter {
    dict: RwLock<WordDict>,
    dict_path: PathBuf,
}

impl SwearFilter {
    /// Create an empty filter that persists new rules to `dict_path`.
    pub fn new(dict_path: impl Into<PathBuf>) -> Self {
        Self {
            dict: RwLock::new(WordDict::new()),
            dict_path: dict_path.into(),
        }
    }

    /// Build a filter from the word list at `dict_path`.
    ///
    /// Lines the dictionary rejects are logged and skipped.
    pub fn load(dict_path: impl Into<PathBuf>) -> SwearsResult<Self> {
        let filter = Self::new(dict_path);
        let file = File::open(&filter.dict_path).map_err(|e| filter.read_error(e))?;

        let mut skipped = 0usize;
        {
            let mut dict = filter.dict.write().expect("dictionary lock poisoned");
            for line in BufReader::new(file).lines() {
                let line = line.map_err(|e| filter.read_error(e))?;
                let rule = normalize_word(&line);
                if rule.is_empty() {
                    continue;
                }
                if let Err(e) = dict.insert(&rule) {
                    tracing::warn!(rule = %rule, error = %e, "Skipping dictionary line");
                    skipped += 1;
                }
            }
        }

        tracing::info!(
            path = ?filter.dict_path,
            rules = filter.rule_count(),
            skipped,
            "Dictionary loaded"
        );
        Ok(filter)
    }

    /// Path of the backing word list.
    pub fn dict_path(&self) -> &Path {
        &self.dict_path
    }

    /// Number of rules currently in the dictionary.
    pub fn rule_count(&self) -> usize {
        self.dict.read().expect("dictionary lock poisoned").len()
    }

    /// Returns true if the normalized `word` is covered by a rule.
    pub fn is_swear(&self, word: &str) -> bool {
        let word = normalize_word(word);
        self.dict.read().expect("dictionary lock poisoned").is_match(&word)
    }

    /// Matched prefix of the normalized `word`, if a rule covers it.
    pub fn matched_prefix(&self, word: &str) -> Option<String> {
        let word = normalize_word(word);
        let dict = self.dict.read().expect("dictionary lock poisoned");
        dict.match_word(&word).map(str::to_string)
    }

    /// Collect the normalized tokens of `message` that match a rule, in order.
    pub fn find_swears(&self, message: &str) -> Vec<String> {
        let dict = self.dict.read().expect("dictionary lock poisoned");
        message
            .split_whitespace()
            .map(normalize_word)
            .filter(|word| dict.is_match(word))
            .collect()
    }

    /// Insert `rule` and append it to the word list.
    ///
    /// Returns the normalized rule as stored.
    pub fn add_rule(&self, rule: &str) -> SwearsResult<String> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.dict_path)
            .map_err(|e| self.read_error(e))?;

        let rule = normalize_word(rule);
        if rule.is_empty() {
            return Err(SwearsError::EmptyRule);
        }

        // The write guard is held through the append so concurrent additions
        // land in the file as whole lines.
        let mut dict = self.dict.write().expect("dictionary lock poisoned");
        match dict.insert(&rule) {
            Ok(()) => {}
            Err(DictError::InvalidWildcardPlacement) => {
                tracing::info!(rule = %rule, "Rejected rule with invalid wildcard");
                return Err(SwearsError::InvalidWildcard { rule });
            }
            Err(source) => {
                tracing::info!(rule = %rule, error = %source, "Rejected conflicting rule");
                return Err(SwearsError::AddRuleConflict { rule, source });
            }
        }

        if let Err(source) = file.write_all(format!("{}\n", rule).as_bytes()) {
            tracing::error!(rule = %rule, error = %source, "Cannot append rule to dictionary file");
            return Err(SwearsError::AddRuleSave { rule, source });
        }
        drop(dict);

        tracing::info!(rule = %rule, "Rule added");
        Ok(rule)
    }

    fn read_error(&self, source: std::io::Error) -> SwearsError {
        tracing::error!(path = ?self.dict_path, error = %source, "Cannot read dictionary file");
        SwearsError::DictFileRead {
            path: self.dict_path.clone(),
            source,
        }
    }
}
