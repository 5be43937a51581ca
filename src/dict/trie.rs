//! Prefix tree over code points with exact and wildcard terminals.

use std::collections::HashMap;

use crate::dict::types::{validate_entry, DictError, DictResult, WILDCARD};

/// What terminates at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum NodeKind {
    #[default]
    Empty,
    /// An exact word ends here.
    WordEnd,
    /// Any continuation of the path matches. Absorbing.
    WildcardRoot,
}

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, Node>,
    kind: NodeKind,
}

/// Dictionary of exact words and `prefix*` rules.
///
/// Entries are only ever added. Every entry must be unambiguous against
/// what is already stored, otherwise [`insert`](Self::insert) rejects it
/// and the existing rules keep their meaning.
#[derive(Debug, Default)]
pub struct WordDict {
    root: Node,
    entries: usize,
}

impl WordDict {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exact word, or a wildcard rule when `entry` ends with `*`.
    ///
    /// A bare `"*"` is accepted on an empty dictionary and matches every
    /// input, the empty word included.
    pub fn insert(&mut self, entry: &str) -> DictResult<()> {
        validate_entry(entry)?;

        let mut node = &mut self.root;
        let mut chars = entry.chars();
        loop {
            if node.kind == NodeKind::WildcardRoot {
                return Err(DictError::WordOverlappedByWildcard);
            }
            match chars.next() {
                None => {
                    if node.kind == NodeKind::WordEnd {
                        return Err(DictError::WordExist);
                    }
                    node.kind = NodeKind::WordEnd;
                    break;
                }
                // Validation guarantees this is the last char.
                Some(WILDCARD) => {
                    if !node.children.is_empty() {
                        return Err(DictError::WildcardOverlappedByWord);
                    }
                    if node.kind == NodeKind::WordEnd {
                        return Err(DictError::WildcardRootExist);
                    }
                    node.kind = NodeKind::WildcardRoot;
                    break;
                }
                Some(c) => node = node.children.entry(c).or_default(),
            }
        }

        self.entries += 1;
        Ok(())
    }

    /// Look `word` up.
    ///
    /// Returns the matched prefix of `word`: the whole word for an exact
    /// match, the stored root for a wildcard match. `None` when no rule
    /// covers it.
    pub fn match_word<'a>(&self, word: &'a str) -> Option<&'a str> {
        let mut node = &self.root;
        for (offset, c) in word.char_indices() {
            if node.kind == NodeKind::WildcardRoot {
                return Some(&word[..offset]);
            }
            node = node.children.get(&c)?;
        }
        match node.kind {
            NodeKind::WordEnd | NodeKind::WildcardRoot => Some(word),
            NodeKind::Empty => None,
        }
    }

    /// Returns true if some stored rule covers `word`.
    pub fn is_match(&self, word: &str) -> bool {
        self.match_word(word).is_some()
    }

    /// Number of successfully inserted entries.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}
