//! Error types for sending notifications.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes why no response was received at all.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built (invalid URL, bad client setup).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Error type for a notification the service did not accept.
///
/// Every variant is final; nothing is retried.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The service rejected the request as malformed (HTTP 400).
    #[error("Server responded with an error:\n> {message}")]
    Rejected {
        /// Response body as sent by the service
        message: String,
    },

    /// The service did not accept the media type (HTTP 415).
    #[error("Protocol error. Something is wrong; maybe try later?")]
    Protocol,

    /// Any other HTTP status.
    #[error("Unexpected error ({status}). Something is wrong; maybe try later?\n> {body}")]
    Unexpected {
        /// HTTP status code
        status: http::StatusCode,
        /// Response body as sent by the service
        body: String,
    },

    /// No response was received.
    #[error("Unexpected error. Request failed: {0}")]
    Transport(#[from] HttpError),
}
