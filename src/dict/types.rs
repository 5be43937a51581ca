//! Dictionary error kinds and entry validation.

use thiserror::Error;

/// Marker that turns the preceding prefix into a wildcard rule.
pub const WILDCARD: char = '*';

/// Reasons an entry can be rejected by [`WordDict::insert`](super::WordDict::insert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DictError {
    /// The entry passes through an existing wildcard root.
    #[error("word is overlapped by existing wildcard entry")]
    WordOverlappedByWildcard,

    /// The exact word is already stored.
    #[error("this word already exists")]
    WordExist,

    /// Longer words already live below the wildcard root.
    #[error("this wildcard entry is overlapped by existing word")]
    WildcardOverlappedByWord,

    /// The wildcard root itself is already stored as an exact word.
    #[error("this wildcard entry's root already exists")]
    WildcardRootExist,

    /// More than one `*`, or a `*` that is not the last character.
    #[error("wildcard can be placed only at the end of the root word")]
    InvalidWildcardPlacement,
}

/// Result type for dictionary insertion.
pub type DictResult<T> = Result<T, DictError>;

/// Check `*` placement before the tree is touched.
pub(crate) fn validate_entry(entry: &str) -> DictResult<()> {
    match entry.matches(WILDCARD).count() {
        0 => Ok(()),
        1 if entry.ends_with(WILDCARD) => Ok(()),
        _ => Err(DictError::InvalidWildcardPlacement),
    }
}
