//! Error types for argument and configuration validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Every variant is detected locally, before any request is sent.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Target name contains characters outside `[A-Za-z0-9_]`.
    #[error("Target must be alphanumerical")]
    InvalidTarget {
        /// The rejected target name
        target: String,
    },

    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid INI.
    #[error("Failed to parse config file '{}' at line {line}: {reason}", path.display())]
    Parse {
        /// Path to the config file
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// The requested target has no section in the configuration file.
    #[error("Couldn't find [{target}] section in config file {}", path.display())]
    SectionNotFound {
        /// The requested target
        target: String,
        /// Path to the config file
        path: PathBuf,
    },

    /// Neither the target section nor the fallback section holds a token.
    #[error("Couldn't find token for [{target}] in config file {}", path.display())]
    TokenNotFound {
        /// The requested target
        target: String,
        /// Path to the config file
        path: PathBuf,
    },

    /// An empty token was passed on the command line.
    #[error("Token must not be empty")]
    EmptyToken,

    /// Token contains characters outside `[A-Za-z0-9_:-]`.
    #[error("Token contains invalid characters. Check configuration")]
    InvalidToken,

    /// Title exceeds the maximum length.
    #[error("Title is too long; maximal length is {max}")]
    TitleTooLong {
        /// Maximum allowed length in characters
        max: usize,
    },

    /// Title contains non-printable characters.
    #[error("Title contains non-printable characters. This is not allowed")]
    TitleNotPrintable,

    /// Body exceeds the maximum length.
    #[error("Body is too long; maximal length is {max}")]
    BodyTooLong {
        /// Maximum allowed length in characters
        max: usize,
    },

    /// Body contains non-printable characters.
    #[error("Body contains non-printable characters. This is not allowed")]
    BodyNotPrintable,
}
