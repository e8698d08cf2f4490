//! Application execution logic.
//!
//! Validates the parsed arguments, resolves the request and sends it.

use thiserror::Error;

use notifyourself::config::{Cli, ConfigError, ConfigStore, NotificationRequest, defaults};
use notifyourself::notify::{HttpClient, HttpError, Notifier, NotifyError, ReqwestClient};

use crate::app::exit_code;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for a failed invocation.
#[derive(Debug, Error)]
pub enum RunError {
    /// Invalid argument or configuration; nothing was sent.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The client could not be created or the service did not accept the
    /// notification.
    #[error(transparent)]
    Notify(#[from] NotifyError),

    /// The async runtime could not be started.
    #[error("Failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl RunError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => exit_code::CONFIG_ERROR,
            Self::Notify(_) | Self::Runtime(_) => exit_code::REQUEST_ERROR,
        }
    }
}

/// Validates the arguments and resolves the request.
///
/// Runs entirely locally; nothing is sent.
///
/// # Errors
///
/// Returns [`RunError::Config`] for an invalid target, an unresolvable
/// token, or an invalid token, title or body.
pub fn prepare(cli: &Cli, store: &ConfigStore) -> Result<NotificationRequest, RunError> {
    cli.validate()?;

    let request = NotificationRequest::resolve(cli, store)?;
    tracing::debug!("{request:?}");
    Ok(request)
}

/// Validates, resolves and sends one notification.
///
/// The runtime and the HTTP client (from `connect`) are only created once
/// the request has passed local validation.
///
/// # Errors
///
/// Returns [`RunError::Config`] for any local validation failure (nothing is
/// sent in that case) and [`RunError::Notify`] if the client cannot be
/// created or the service does not accept the notification.
pub fn execute<H, F>(cli: &Cli, store: &ConfigStore, connect: F) -> Result<(), RunError>
where
    H: HttpClient,
    F: FnOnce() -> Result<H, HttpError>,
{
    let request = prepare(cli, store)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(RunError::Runtime)?;

    let notifier = Notifier::new(connect().map_err(NotifyError::from)?);
    tracing::debug!("Notification endpoint: {}", notifier.endpoint());

    runtime.block_on(notifier.send(&request))?;
    Ok(())
}

/// Runs [`execute`] against the real service.
///
/// Excluded from coverage - requires network access.
#[cfg(not(tarpaulin_include))]
pub fn run(cli: &Cli) -> Result<(), RunError> {
    let store = ConfigStore::resolve(cli.config.as_deref());

    execute(cli, &store, || {
        ReqwestClient::with_timeout(defaults::request_timeout())
    })
}
