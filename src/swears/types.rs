//! Swear filter error definitions.

use std::path::PathBuf;
use thiserror::Error;

use crate::dict::DictError;

/// Errors from loading the word list or adding rules to it.
#[derive(Debug, Error)]
pub enum SwearsError {
    /// Word list could not be opened or read.
    #[error("cannot read dictionary file {path:?}: {source}")]
    DictFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule is empty after normalization.
    #[error("rule is empty")]
    EmptyRule,

    /// Rule has a misplaced or repeated `*`.
    #[error("invalid wildcard placement in rule '{rule}'")]
    InvalidWildcard { rule: String },

    /// Rule is ambiguous with an existing one.
    #[error("rule '{rule}' conflicts with the dictionary: {source}")]
    AddRuleConflict {
        rule: String,
        #[source]
        source: DictError,
    },

    /// Rule was accepted but could not be written to the word list.
    #[error("cannot save rule '{rule}': {source}")]
    AddRuleSave {
        rule: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for swear filter operations.
pub type SwearsResult<T> = Result<T, SwearsError>;
