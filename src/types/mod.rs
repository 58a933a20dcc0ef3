//! Types module
//!
//! Contains the lexical conventions and shared types used throughout the library:
//! - `token`: Token alias, flag marker / separator rules, token classification
//! - `error`: Error types for the I/O edges of the library

pub mod error;
pub mod token;

pub use error::CommandError;
pub use token::{
    is_flag_like, is_switch_like, split_joined, takes_adjacent_value, Token, TokenKind,
    FLAG_MARKER, SEPARATOR,
};
