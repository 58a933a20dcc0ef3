//! Core classification module
//!
//! This module contains the classification pipeline, leaf first:
//! - `token_sequence` - Immutable, index-addressable view over the raw tokens
//! - `switch_set` - Flag-like tokens without an associated value
//! - `definition_map` - Key/value options in joined or adjacent form
//! - `command` - The facade composing the views and answering queries
//!
//! Data flows one way: raw tokens -> TokenSequence -> {SwitchSet, DefinitionMap}
//! -> CommandContext.

pub mod command;
pub mod definition_map;
pub mod switch_set;
pub mod token_sequence;

pub use command::CommandContext;
pub use definition_map::DefinitionMap;
pub use switch_set::SwitchSet;
pub use token_sequence::TokenSequence;
