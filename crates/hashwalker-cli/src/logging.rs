//! Logging setup
//!
//! All log output goes to stderr; stdout is reserved for the report.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directive for the given verbosity
#[must_use]
pub const fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Build the log filter for the given verbosity
#[must_use]
pub fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(filter_directive(verbose))
}

/// Install the global tracing subscriber
///
/// Must be called at most once per process.
pub fn setup_logging(verbose: bool) {
    let stderr_is_tty = std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(stderr_is_tty),
        )
        .with(log_filter(verbose))
        .init();
}
