//! Token file reader
//!
//! Reads a saved invocation from a file, one token per line. Useful for
//! replaying command lines that are awkward to type (tokens with spaces or
//! leading dashes) through the classifier.
//!
//! # Format
//!
//! - Each line is one token, taken verbatim (no trimming, no quoting rules)
//! - `\n` and `\r\n` line endings are both accepted
//! - A trailing newline does not produce an empty final token
//! - Blank lines in the middle are empty tokens, as in a real argv

use crate::core::TokenSequence;
use crate::types::CommandError;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::debug;

/// Read a token sequence from `path`
///
/// # Errors
///
/// - `CommandError::FileNotFound` if the file does not exist
/// - `CommandError::IoError` if it cannot be opened or read
pub fn read_tokens(path: &Path) -> Result<TokenSequence, CommandError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CommandError::file_not_found(&path.display().to_string()),
        _ => CommandError::from(e),
    })?;

    let tokens = BufReader::with_capacity(8 * 1024, file)
        .lines()
        .collect::<Result<Vec<_>, _>>()?;

    debug!(path = %path.display(), tokens = tokens.len(), "read token file");

    Ok(TokenSequence::new(tokens))
}
