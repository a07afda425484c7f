//! Outbound HTTP transport.
//!
//! The fetcher talks to the service through [`Transport`] so tests can count
//! and script requests without a network.

use std::future::Future;

use reqwest::Url;

use crate::error_handling::BoxError;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text (empty for non-success statuses)
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a single GET request.
///
/// Implementations must not retry; an `Err` means no HTTP response was
/// received at all (DNS failure, refused connection, timeout).
pub trait Transport {
    /// Sends `GET url` and returns the response.
    fn get(&self, url: &Url) -> impl Future<Output = Result<HttpResponse, BoxError>> + Send;
}

/// [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an already configured client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, BoxError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        // The body of an error page is never used
        let body = if status.is_success() {
            response.text().await?
        } else {
            String::new()
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}
