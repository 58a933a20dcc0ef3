use std::io::IsTerminal;
use tracing::Level;

use crate::cli::CliArgs;

/// Environment variable checked before `RUST_LOG` for a log filter expression.
const LOG_ENV_VAR: &str = "COMMANDLINES_LOG";

/// Initialize tracing/logging based on the contents of the parsed CLI args.
///
/// Logs always go to stderr; stdout is reserved for the classification report.
///
/// # Verbosity levels
///
/// - `0`: WARN and ERROR only, simple format
/// - `1`: INFO level, structured format with timestamp/target
/// - `2`: DEBUG level, structured format (one event per classified command line)
/// - `3+`: TRACE level, structured format (one event per recorded definition)
///
/// # Environment variable support
///
/// `COMMANDLINES_LOG` takes priority over `RUST_LOG`; if neither is set the
/// level comes from the verbosity count.
///
/// # Panics
///
/// Panics if called more than once in the same process, as the global tracing
/// subscriber can only be initialized once.
pub fn init(args: &CliArgs) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let use_ansi = std::io::stderr().is_terminal();

    if args.verbose == 0 {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_level(true)
                    .with_ansi(use_ansi)
                    .without_time(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(use_ansi),
            )
            .init();
    }
}

/// Initialize tracing for tests.
///
/// Output goes through the test writer so it only shows for failing tests.
/// Safe to call from any number of tests; only the first call installs the
/// subscriber.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    use std::sync::OnceLock;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: OnceLock<()> = OnceLock::new();

    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("trace"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_level(true)
            .init();
    });
}
