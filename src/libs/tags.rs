//! Tokenized tag lists.
//!
//! Hamster hands tags over as one comma-joined string. Matching works on the
//! individual tokens, so `alphabeta` never matches a `beta` filter.

use std::fmt::{Display, Formatter};

/// Ordered, de-duplicated set of lowercase tag tokens.
///
/// Order is the order the tags were first seen in, which for rows coming
/// from the database is the storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Splits a comma-joined list. Blank tokens are dropped, the rest are trimmed and lower-cased.
    pub fn parse(raw: &str) -> Self {
        let mut tags: Vec<String> = Vec::new();
        for token in raw.split(',') {
            let token = token.trim().to_lowercase();
            if !token.is_empty() && !tags.contains(&token) {
                tags.push(token);
            }
        }
        Self { tags }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// True when at least one token appears in both sets.
    pub fn intersects(&self, other: &TagSet) -> bool {
        self.tags.iter().any(|tag| other.contains(tag))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl Display for TagSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tags.join(","))
    }
}
