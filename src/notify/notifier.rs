//! Sends a [`NotificationRequest`] to the notification service.

use http::header::CONTENT_TYPE;
use http::{HeaderValue, StatusCode};
use url::Url;
use url::form_urlencoded;

use crate::config::NotificationRequest;
use crate::config::defaults;

use super::{HttpClient, HttpRequest, HttpResponse, NotifyError};

/// Media type of the request body.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Posts notifications to the service endpoint.
///
/// # Example
///
/// ```no_run
/// use notifyourself::config::NotificationRequest;
/// use notifyourself::notify::{Notifier, ReqwestClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::with_timeout(std::time::Duration::from_secs(30))?;
/// let notifier = Notifier::new(client);
/// let request = NotificationRequest::new("my-token", "Build finished", None)?;
/// notifier.send(&request).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Notifier<H> {
    client: H,
    endpoint: Url,
}

impl<H> Notifier<H> {
    /// Creates a notifier for the public notification service.
    ///
    /// # Panics
    ///
    /// Never in practice; the service URL is a valid constant.
    #[must_use]
    pub fn new(client: H) -> Self {
        let endpoint = Url::parse(defaults::SERVICE_URL).expect("service URL is a valid URL");
        Self::with_endpoint(client, endpoint)
    }

    /// Creates a notifier posting to a different endpoint.
    #[must_use]
    pub const fn with_endpoint(client: H, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Builds the form-encoded POST for `request`.
    ///
    /// The `body` field is only present when the request has a body.
    #[must_use]
    pub fn build_request(&self, request: &NotificationRequest) -> HttpRequest {
        let mut form = form_urlencoded::Serializer::new(String::new());
        form.append_pair("token", request.token());
        form.append_pair("title", request.title());
        if let Some(body) = request.body() {
            form.append_pair("body", body);
        }

        HttpRequest::post(self.endpoint.clone())
            .with_header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
            .with_body(form.finish().into_bytes())
    }
}

impl<H: HttpClient> Notifier<H> {
    /// Sends the notification and classifies the response.
    ///
    /// # Errors
    ///
    /// Returns a [`NotifyError`] for any status other than 200, or when no
    /// response was received.
    pub async fn send(&self, request: &NotificationRequest) -> Result<(), NotifyError> {
        let http_request = self.build_request(request);

        tracing::debug!(
            "Sending notification (title: {} chars, body: {})",
            request.title().chars().count(),
            request.body().map_or(0, |b| b.chars().count()),
        );

        let response = self.client.request(http_request).await?;
        tracing::debug!("Service responded with {}", response.status);

        classify(&response)
    }
}

/// Maps a service response to the outcome of the notification.
///
/// # Errors
///
/// - 400: [`NotifyError::Rejected`] with the response body
/// - 415: [`NotifyError::Protocol`]
/// - anything else but 200: [`NotifyError::Unexpected`]
pub fn classify(response: &HttpResponse) -> Result<(), NotifyError> {
    match response.status {
        StatusCode::OK => Ok(()),
        StatusCode::BAD_REQUEST => Err(NotifyError::Rejected {
            message: response.body_text(),
        }),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => Err(NotifyError::Protocol),
        status => Err(NotifyError::Unexpected {
            status,
            body: response.body_text(),
        }),
    }
}
