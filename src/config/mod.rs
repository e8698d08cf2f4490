//! Configuration layer for notifyourself.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - INI configuration parsing with fallback lookup ([`IniConfig`])
//! - Configuration file location and bootstrap ([`ConfigStore`])
//! - The validated request ([`NotificationRequest`])
//! - Default values ([`defaults`])
//!
//! # Token resolution
//!
//! An explicit `--token` always wins and the configuration file is then not
//! read. Otherwise the token is read from the section named by `--target`
//! (default `DEFAULT`). A named section without a `token` key inherits the
//! one from `[DEFAULT]`.
//!
//! # Bootstrap
//!
//! When the default configuration file does not exist, a commented
//! template with an empty token is written on first run. A custom
//! `--config` path is never created, and an existing file is never modified.

mod cli;
pub mod defaults;
mod error;
mod ini;
mod request;
mod store;

#[cfg(test)]
mod cli_tests;

pub use cli::Cli;
pub use error::ConfigError;
pub use ini::{IniConfig, IniError, LookupError};
pub use request::NotificationRequest;
pub use store::{
    ConfigStore, default_config_path, default_config_template, lookup_token, resolve_config_path,
    write_default_config,
};
