//! Wildcard word dictionary.
//!
//! # Data Flow
//! ```text
//! Word list file / "add rule" command
//!     → types.rs (entry validation, error kinds)
//!     → trie.rs (descend by code point, tag the final node)
//!
//! Message token
//!     → trie.rs (descend until WordEnd / WildcardRoot / dead end)
//!     → Return: matched prefix or no match
//! ```
//!
//! # Design Decisions
//! - Traversal is per `char` (Unicode scalar value), never per byte
//! - A single trailing `*` turns an entry into a prefix rule
//! - Conflicting entries are rejected on insertion, never merged
//! - No case folding here; callers normalize
//! - No internal locking; wrap in a lock when shared

pub mod trie;
pub mod types;

pub use trie::WordDict;
pub use types::{DictError, DictResult, WILDCARD};
