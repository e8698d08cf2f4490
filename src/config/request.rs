//! Validated notification request.
//!
//! A [`NotificationRequest`] can only be obtained through validation, so
//! holding one proves the token, title and body are acceptable.

use std::fmt;

use crate::validate::{is_printable, is_token};

use super::ConfigError;
use super::cli::Cli;
use super::defaults;
use super::store::ConfigStore;

/// Fully validated notification ready to be sent.
#[derive(Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    token: String,
    title: String,
    body: Option<String>,
}

impl fmt::Debug for NotificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationRequest")
            .field("token", &"<redacted>")
            .field("title", &self.title)
            .field("body", &self.body)
            .finish()
    }
}

impl NotificationRequest {
    /// Validates the parts and builds a request.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The token is empty or contains characters outside `[A-Za-z0-9_:-]`
    /// - The title is longer than 200 characters or not printable
    /// - The body is longer than 500 characters or not printable
    pub fn new(
        token: impl Into<String>,
        title: impl Into<String>,
        body: Option<String>,
    ) -> Result<Self, ConfigError> {
        let token = token.into();
        let title = title.into();

        validate_token(&token)?;
        validate_title(&title)?;
        if let Some(ref body) = body {
            validate_body(body)?;
        }

        Ok(Self { token, title, body })
    }

    /// Resolves the token for the parsed arguments and builds a request.
    ///
    /// The configuration template is bootstrapped first. The configuration
    /// file is only read when no `--token` was given.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be resolved from the
    /// configuration, or if validation fails (see [`NotificationRequest::new`]).
    pub fn resolve(cli: &Cli, store: &ConfigStore) -> Result<Self, ConfigError> {
        store.ensure_default();

        let token = match cli.token {
            Some(ref token) => token.clone(),
            None => {
                tracing::debug!(
                    "Reading token for [{}] from {}",
                    cli.target,
                    store.path().display()
                );
                store.token_for(&cli.target)?
            }
        };

        Self::new(token, cli.title.clone(), cli.body.clone())
    }

    /// Returns the token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

fn validate_token(token: &str) -> Result<(), ConfigError> {
    if token.is_empty() {
        return Err(ConfigError::EmptyToken);
    }
    if !is_token(token) {
        return Err(ConfigError::InvalidToken);
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<(), ConfigError> {
    if title.chars().count() > defaults::TITLE_MAX_LEN {
        return Err(ConfigError::TitleTooLong {
            max: defaults::TITLE_MAX_LEN,
        });
    }
    if !is_printable(title) {
        return Err(ConfigError::TitleNotPrintable);
    }
    Ok(())
}

fn validate_body(body: &str) -> Result<(), ConfigError> {
    if body.chars().count() > defaults::BODY_MAX_LEN {
        return Err(ConfigError::BodyTooLong {
            max: defaults::BODY_MAX_LEN,
        });
    }
    if !is_printable(body) {
        return Err(ConfigError::BodyNotPrintable);
    }
    Ok(())
}
