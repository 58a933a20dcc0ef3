//! Command line classification inspector
//!
//! Classifies the tokens it is given and prints a report, which makes it easy
//! to see how a command line would be understood by the library.
//!
//! # Usage
//!
//! ```bash
//! commandlines -- build -v --out=bin --name app
//! commandlines --format csv -- build -v --out=bin --name app
//! commandlines --from-file tokens.txt
//! commandlines -vv -- deploy --env prod
//! ```
//!
//! Everything after `--` is classified, never interpreted by the inspector
//! itself. Logs go to stderr (`-v` raises verbosity, `COMMANDLINES_LOG` or
//! `RUST_LOG` override it), the report to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (token file not found or unreadable, report not writable)

use commandlines::{cli, io, logging, CommandContext};
use std::process;
use tracing::error;

fn main() {
    let args = cli::parse_args();
    logging::init(&args);

    let tokens = match args.input() {
        Ok(tokens) => tokens,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let ctx = CommandContext::from_sequence(tokens);

    let mut output = std::io::stdout();
    if let Err(e) = io::write_report(&ctx, args.format, &mut output) {
        error!("{}", e);
        process::exit(1);
    }
}
