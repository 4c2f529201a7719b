//! Ordered example registry.
//!
//! # Responsibilities
//! - Hold (token, directive) pairs in insertion order
//! - Look up the directive for a request path + query
//! - Report entries that can never be selected
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) substring scan; first match wins
//! - Empty path is an explicit no-match

use serde::{Deserialize, Serialize};

use crate::selection::builtin::BUILTIN_EXAMPLES;

/// A single path token and the directive it selects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectionEntry {
    /// Substring looked for in the request path + query.
    pub token: String,

    /// `example_<name>` or `code<digits>`.
    pub directive: String,
}

impl SelectionEntry {
    pub fn new(token: impl Into<String>, directive: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            directive: directive.into(),
        }
    }
}

/// An entry that cannot match because an earlier token always wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowedEntry {
    /// Index of the unreachable entry.
    pub index: usize,
    /// Index of the earlier entry that takes precedence.
    pub shadowed_by: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ExampleRegistry {
    entries: Vec<SelectionEntry>,
}

impl ExampleRegistry {
    /// Build a registry, keeping the given order.
    pub fn new(entries: Vec<SelectionEntry>) -> Self {
        Self { entries }
    }

    /// The patient-check table shipped with the proxy.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_EXAMPLES
                .iter()
                .map(|(token, directive)| SelectionEntry::new(*token, *directive))
                .collect(),
        )
    }

    /// Return the directive of the first entry whose token occurs in `path`.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        if path.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|entry| path.contains(entry.token.as_str()))
            .map(|entry| entry.directive.as_str())
    }

    /// Entries whose token contains an earlier token. Any path holding the
    /// later token also holds the earlier one, so the later entry is dead.
    pub fn shadowed(&self) -> Vec<ShadowedEntry> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                self.entries[..index]
                    .iter()
                    .position(|earlier| entry.token.contains(earlier.token.as_str()))
                    .map(|shadowed_by| ShadowedEntry { index, shadowed_by })
            })
            .collect()
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
