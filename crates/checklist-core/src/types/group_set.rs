//! Normalized execution-group sets.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A set of lowercase, trimmed execution-group names.
///
/// Equality is set equality: order, case, and duplicates never matter.
/// Backed by a `BTreeSet` so iteration and rendering are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSet(BTreeSet<String>);

impl GroupSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `text` on commas and whitespace and collect the non-empty tokens.
    pub fn parse_list(text: &str) -> Self {
        text.split(|c: char| c == ',' || c.is_whitespace()).collect()
    }

    /// Split `text` on commas only, trimming each token.
    pub fn parse_csv(text: &str) -> Self {
        text.split(',').collect()
    }

    /// Insert a token after normalizing it. Empty tokens are ignored.
    pub fn insert(&mut self, token: &str) {
        let token = token.trim();
        if !token.is_empty() {
            self.0.insert(token.to_lowercase());
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(&token.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Tokens present in `self` but absent from `other`, in sorted order.
    pub fn missing_from(&self, other: &GroupSet) -> Vec<String> {
        self.0.difference(&other.0).cloned().collect()
    }

    /// Merge every token of `other` into `self`.
    pub fn extend_from(&mut self, other: &GroupSet) {
        self.0.extend(other.0.iter().cloned());
    }
}

impl<S: AsRef<str>> FromIterator<S> for GroupSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = GroupSet::new();
        for token in iter {
            set.insert(token.as_ref());
        }
        set
    }
}

impl fmt::Display for GroupSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        f.write_str(&joined.join(", "))
    }
}
