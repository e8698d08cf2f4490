//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and clap error reporting
//! that support the main entry point.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    /// Success (exit code 0).
    pub const SUCCESS: u8 = 0;

    /// Configuration error (exit code 1) - invalid args, missing section or token, etc.
    pub const CONFIG_ERROR: u8 = 1;

    /// Request error (exit code 2) - rejected request, network failure, etc.
    pub const REQUEST_ERROR: u8 = 2;
}

/// Prints a clap parse error and returns the exit code for it.
///
/// `--help` and `--version` exit successfully. Every other parse error,
/// including conflicting options, is a configuration error.
pub fn report_parse_error(error: &clap::Error) -> u8 {
    // Printing can only fail if the stream is closed; the exit code still applies.
    let _ = error.print();

    if error.use_stderr() {
        exit_code::CONFIG_ERROR
    } else {
        exit_code::SUCCESS
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so stdout only carries the success message.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
