//! notifyourself
//!
//! Entry point for the notifyourself command.

use notifyourself::config::Cli;
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, report_parse_error, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => return ExitCode::from(report_parse_error(&e)),
    };

    setup_tracing(cli.verbose);

    match run::run(&cli) {
        Ok(()) => {
            println!("Notification sent");
            ExitCode::from(exit_code::SUCCESS)
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
