//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Name of the fallback section, also the default target.
pub const TARGET: &str = "DEFAULT";

/// Key holding the token inside a configuration section.
pub const TOKEN_KEY: &str = "token";

/// Directory below the home directory holding the configuration file.
pub const CONFIG_DIR: &str = ".config/notifyourself";

/// File name of the configuration file.
pub const CONFIG_FILE: &str = "config.ini";

/// Notification service endpoint.
pub const SERVICE_URL: &str = "https://us-central1-notifyourself.cloudfunctions.net/notifyourself";

/// Maximum title length in characters.
pub const TITLE_MAX_LEN: usize = 200;

/// Maximum body length in characters.
pub const BODY_MAX_LEN: usize = 500;

/// Request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Request timeout as Duration.
#[must_use]
pub const fn request_timeout() -> Duration {
    Duration::from_secs(REQUEST_TIMEOUT_SECS)
}
