//! Token-level types for command line classification
//!
//! This module defines the lexical conventions used to classify raw command
//! line tokens, along with the classification result for a single token.

use serde::Serialize;

/// A single raw command line token
pub type Token = String;

/// Leading character identifying a token as option-like (`-v`, `--name`)
pub const FLAG_MARKER: char = '-';

/// Character joining an option key to an inline value (`--out=bin`)
pub const SEPARATOR: char = '=';

/// Classification of a single token within an invocation
///
/// A token is reported as exactly one kind, even though it may belong to
/// several views (a bare `--name` followed by a value is both a switch and a
/// definition key; the definition wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A token addressed only by its index
    Positional,

    /// A flag-like token with no associated value
    Switch,

    /// A flag-like token with an associated value, joined or adjacent
    Definition,
}

/// Returns true if the token starts with the flag marker
pub fn is_flag_like(token: &str) -> bool {
    token.starts_with(FLAG_MARKER)
}

/// Returns true if the token is flag-like and carries no inline value
///
/// `-f` and `--foo` qualify, `--foo=bar` does not. Whether such a token ends
/// up a switch or a definition key depends on the token that follows it.
pub fn is_switch_like(token: &str) -> bool {
    is_flag_like(token) && !token.contains(SEPARATOR)
}

/// Returns true if a bare flag consumes the following token as its value
///
/// `next` is the token after `token`, or `None` when `token` is last. A value
/// is taken only when the next token is not itself flag-like.
pub fn takes_adjacent_value(token: &str, next: Option<&str>) -> bool {
    is_switch_like(token) && next.is_some_and(|n| !is_flag_like(n))
}

/// Splits a joined definition (`--key=value`) on the first separator
///
/// Returns `None` for tokens that are not flag-like or carry no separator.
/// Later separators stay part of the value: `--opt=a=b` yields `("--opt", "a=b")`.
pub fn split_joined(token: &str) -> Option<(&str, &str)> {
    if !is_flag_like(token) {
        return None;
    }
    token.split_once(SEPARATOR)
}
