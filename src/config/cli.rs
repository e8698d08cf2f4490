//! CLI argument parsing using clap.
//!
//! Defines the command-line interface and the eager target check.

use std::path::PathBuf;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

use crate::validate::is_target;

use super::ConfigError;
use super::defaults;

/// Send a notification to your phone
#[derive(Debug, Parser)]
#[command(name = "notifyourself")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Notification title
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub title: String,

    /// Longer message in the body of the notification
    pub body: Option<String>,

    /// Use this token to send the message
    #[arg(long, short = 'T', conflicts_with = "target")]
    pub token: Option<String>,

    /// Send message to this target phone specified in the config file
    #[arg(long, short = 't', default_value = defaults::TARGET)]
    pub target: String,

    /// Config file to use instead of default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid or conflicting arguments, and for
    /// `--help`/`--version` requests.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Same as [`Cli::try_parse_args`].
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Checks the target name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTarget`] if the target contains
    /// characters other than letters, digits and `_`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_target(&self.target) {
            Ok(())
        } else {
            Err(ConfigError::InvalidTarget {
                target: self.target.clone(),
            })
        }
    }
}
