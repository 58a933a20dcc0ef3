//! Switch classification
//!
//! A switch is a flag-like token without an associated value: it carries no
//! inline `=` value and does not take the following token as its value. Tokens
//! are stored exactly as they appeared, markers included (`-v` stays `-v`), in
//! invocation order with duplicates preserved.

use crate::core::TokenSequence;
use crate::types::{is_switch_like, takes_adjacent_value, Token};

/// Ordered subset of tokens that look like bare flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchSet {
    switches: Vec<Token>,
}

impl SwitchSet {
    /// Build the switch set with a single pass over the sequence
    pub fn from_tokens(tokens: &TokenSequence) -> Self {
        let slice = tokens.as_slice();
        let switches = slice
            .iter()
            .enumerate()
            .filter(|(i, token)| {
                let next = slice.get(i + 1).map(String::as_str);
                is_switch_like(token) && !takes_adjacent_value(token, next)
            })
            .map(|(_, token)| token.clone())
            .collect();

        SwitchSet { switches }
    }

    /// Returns true if `token` was classified as a switch
    pub fn contains(&self, token: &str) -> bool {
        self.switches.iter().any(|s| s == token)
    }

    /// Number of switches, duplicates included
    pub fn len(&self) -> usize {
        self.switches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.switches.iter().map(String::as_str)
    }
}

impl From<&TokenSequence> for SwitchSet {
    fn from(tokens: &TokenSequence) -> Self {
        SwitchSet::from_tokens(tokens)
    }
}
