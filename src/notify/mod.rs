//! Notification delivery over HTTP.
//!
//! This module provides:
//! - HTTP request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The HTTP client abstraction ([`HttpClient`]) and its reqwest
//!   implementation ([`ReqwestClient`])
//! - The notifier that form-encodes a request and classifies the service
//!   response ([`Notifier`], [`classify`])
//!
//! A notification is sent exactly once. There is no retry.

mod client;
mod error;
mod notifier;
mod transport;


pub use client::ReqwestClient;
pub use error::{HttpError, NotifyError};
pub use notifier::{Notifier, classify};
pub use transport::{HttpClient, HttpRequest, HttpResponse};
