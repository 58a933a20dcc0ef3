// CLI module
// Argument definition for the `commandlines` inspector binary

mod args;

pub use args::{CliArgs, ReportFormat};

use clap::Parser;

/// Parse the inspector's own command-line arguments using clap
///
/// If parsing fails (e.g., an unknown format or `--help`), clap displays an
/// error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
