//! Command line classification library
//! # Overview
//!
//! This library takes the raw tokens of a program invocation and classifies
//! each of them into three overlapping views, then answers queries about them
//! without hand-written argv loops.
//!
//! # Architecture
//!
//! - [`types`] - Lexical conventions, token classification and error types
//! - [`core`] - The classification pipeline:
//!   - [`core::token_sequence`] - Index-addressable view over the raw tokens
//!   - [`core::switch_set`] - Flags without an associated value
//!   - [`core::definition_map`] - Key/value options
//!   - [`core::command`] - The query facade
//! - [`io`] - Token files and classification reports
//! - [`cli`] - Arguments of the `commandlines` inspector binary
//! - [`logging`] - Tracing setup for the inspector binary
//!
//! # Views
//!
//! - **Positional**: any token, addressed by its index
//! - **Switch**: a `-` prefixed token with no value (`-v`, `--force`)
//! - **Definition**: a `-` prefixed token with a value, joined (`--out=bin`)
//!   or adjacent (`--name app`)
//!
//! # Example
//!
//! ```
//! use commandlines::CommandContext;
//!
//! let ctx = CommandContext::new(["build", "-v", "--out=bin", "--name", "app"]);
//! assert_eq!(ctx.subcommand(), "build");
//! assert!(ctx.wants_version());
//! assert_eq!(ctx.definition_value("--out"), "bin");
//! assert_eq!(ctx.flag_value("--name"), "app");
//! assert_eq!(ctx.positional(9), "");
//! ```

pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use crate::core::{CommandContext, DefinitionMap, SwitchSet, TokenSequence};
pub use types::{CommandError, Token, TokenKind};
