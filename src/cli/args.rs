use crate::core::TokenSequence;
use crate::io::read_tokens;
use crate::types::CommandError;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Classify command line tokens into positionals, switches and definitions
#[derive(Parser, Debug)]
#[command(name = "commandlines")]
#[command(
    about = "Classify command line tokens into positionals, switches and definitions",
    long_about = None
)]
pub struct CliArgs {
    /// Report format
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "text",
        help = "Report format: 'text' for a readable dump or 'csv' for one row per token"
    )]
    pub format: ReportFormat,

    /// Read tokens from a file instead of the command line
    #[arg(
        long = "from-file",
        value_name = "PATH",
        conflicts_with = "tokens",
        help = "Read the tokens to classify from a file, one token per line"
    )]
    pub from_file: Option<PathBuf>,

    /// Logging verbosity
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Tokens to classify, given after `--`
    #[arg(last = true, value_name = "TOKENS")]
    pub tokens: Vec<String>,
}

/// Available report formats
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Csv,
}

impl CliArgs {
    /// Resolve the token sequence to classify
    ///
    /// Reads `--from-file` when given, otherwise uses the tokens after `--`.
    pub fn input(&self) -> Result<TokenSequence, CommandError> {
        match &self.from_file {
            Some(path) => read_tokens(path),
            None => Ok(TokenSequence::new(self.tokens.iter().cloned())),
        }
    }
}
