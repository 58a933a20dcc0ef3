//! Definition classification
//!
//! Definitions are key/value options. Two syntaxes are recognized, both in a
//! single left-to-right pass over the token sequence:
//!
//! - **Joined**: `--key=value`, split on the first `=` only (`--opt=a=b` maps
//!   `--opt` to `a=b`)
//! - **Adjacent**: `--key value`, where `--key` has no `=`, is not the last
//!   token, and `value` is not itself flag-like
//!
//! # Collision Handling
//!
//! When the same key is produced more than once, the later occurrence in scan
//! order overwrites the earlier value.

use crate::core::TokenSequence;
use crate::types::{split_joined, takes_adjacent_value, Token};
use std::collections::HashMap;
use tracing::trace;

/// Mapping from flag-like key to its associated value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionMap {
    definitions: HashMap<Token, Token>,
}

impl DefinitionMap {
    /// Build the definition map with a single pass over the sequence
    pub fn from_tokens(tokens: &TokenSequence) -> Self {
        let slice = tokens.as_slice();
        let mut definitions = HashMap::new();

        for (i, token) in slice.iter().enumerate() {
            let next = slice.get(i + 1).map(String::as_str);

            if let Some((key, value)) = split_joined(token) {
                trace!(key, value, "joined definition");
                definitions.insert(key.to_string(), value.to_string());
            } else if let Some(value) = next.filter(|_| takes_adjacent_value(token, next)) {
                trace!(key = token.as_str(), value, "adjacent definition");
                definitions.insert(token.clone(), value.to_string());
            }
        }

        DefinitionMap { definitions }
    }

    /// Returns true if `key` was defined
    pub fn contains_key(&self, key: &str) -> bool {
        self.definitions.contains_key(key)
    }

    /// Return the value mapped to `key`, or an empty string if undefined
    pub fn get(&self, key: &str) -> &str {
        self.definitions.get(key).map_or("", String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate over `(key, value)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.definitions
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Return `(key, value)` pairs sorted by key
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_unstable();
        pairs
    }
}

impl From<&TokenSequence> for DefinitionMap {
    fn from(tokens: &TokenSequence) -> Self {
        DefinitionMap::from_tokens(tokens)
    }
}
