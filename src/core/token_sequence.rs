//! Immutable, index-addressable view over raw command line tokens
//!
//! TokenSequence is the leaf of the classification pipeline. Every other view
//! (switches, definitions, the command context) is derived from it and never
//! mutates it.
//!
//! # Out-of-range Behavior
//!
//! Lookups never fail. Any index outside `[0, len)`, including negative
//! indices, yields an empty string.

use crate::types::Token;
use std::io::{self, Write};

/// Ordered, 0-indexed sequence of raw tokens
///
/// The order matches the original invocation and the length is fixed once
/// constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    /// Create a sequence from the raw tokens (executable name already removed)
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Token>,
    {
        TokenSequence {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Return the token at `index`, or an empty string if out of range
    ///
    /// Accepts any integer type; negative values fail the conversion to
    /// `usize` and are treated as out of range.
    ///
    /// ```
    /// use commandlines::TokenSequence;
    ///
    /// let tokens = TokenSequence::new(["build", "--release"]);
    /// assert_eq!(tokens.at(1), "--release");
    /// assert_eq!(tokens.at(2), "");
    /// assert_eq!(tokens.at(-1), "");
    /// ```
    pub fn at<I>(&self, index: I) -> &str
    where
        I: TryInto<usize>,
    {
        index
            .try_into()
            .ok()
            .and_then(|i| self.tokens.get(i))
            .map_or("", String::as_str)
    }

    /// Return the index of the first exact occurrence of `token`
    pub fn position_of(&self, token: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t == token)
    }

    /// Return the token following `index`, or an empty string at the end
    pub fn next_after(&self, index: usize) -> &str {
        match index.checked_add(1) {
            Some(next) => self.at(next),
            None => "",
        }
    }

    /// Number of tokens in the sequence
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the sequence holds no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens in invocation order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Borrow the underlying tokens
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Write every token with its index, one `argv[i] = token` line each
    pub fn write_indexed(&self, output: &mut dyn Write) -> io::Result<()> {
        for (index, token) in self.tokens.iter().enumerate() {
            writeln!(output, "argv[{}] = {}", index, token)?;
        }
        Ok(())
    }
}

impl<S: Into<Token>> FromIterator<S> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TokenSequence::new(iter)
    }
}
