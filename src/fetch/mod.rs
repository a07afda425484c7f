//! Availability fetching.
//!
//! Validates the query, builds the check URL and issues exactly one GET to the
//! availability service. The outcome is classified into a [`RawResponse`];
//! nothing is retried.

mod transport;
mod types;

use log::{debug, info, warn};
use reqwest::Url;

pub use transport::{HttpResponse, ReqwestTransport, Transport};
pub use types::RawResponse;

use crate::config::{
    Config, ConfigValidationError, DOMAIN_QUERY_PARAM, SERVICE_HOST, USAGE_EXAMPLES,
};
use crate::domain::validate_domain;
use crate::error_handling::InitializationError;
use crate::initialization::init_client;
use crate::utils::sanitize_error_message;

/// Wraps a results fragment in a minimal document so it parses as a full page.
pub fn wrap_fragment(fragment: &str) -> String {
    format!("<html><body>{fragment}</body></html>")
}

/// Message for a query that is neither a domain nor a URL.
pub fn invalid_input_message(input: &str) -> String {
    format!("{input} is not a valid domain. {USAGE_EXAMPLES}")
}

/// Message for a non-success answer from the service.
pub fn unreachable_message() -> String {
    format!("{SERVICE_HOST} is not reachable")
}

/// Sends availability checks to the service through a [`Transport`].
#[derive(Debug, Clone)]
pub struct AvailabilityFetcher<T = ReqwestTransport> {
    transport: T,
    endpoint: Url,
}

impl AvailabilityFetcher<ReqwestTransport> {
    /// Builds a fetcher with a reqwest transport from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ConfigError` if the configuration is
    /// invalid, or `InitializationError::HttpClientError` if the client cannot
    /// be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        config.validate()?;
        let endpoint = Url::parse(&config.endpoint).map_err(|e| ConfigValidationError {
            field: "endpoint",
            message: e.to_string(),
        })?;
        let client = init_client(config)?;
        Ok(Self::new(ReqwestTransport::new(client), endpoint))
    }
}

impl<T: Transport> AvailabilityFetcher<T> {
    /// Creates a fetcher sending requests to `endpoint`.
    pub fn new(transport: T, endpoint: Url) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Check endpoint, without the `domain` parameter.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Check URL for `domain`: the endpoint with `domain` as its only query
    /// parameter.
    pub fn check_url(&self, domain: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair(DOMAIN_QUERY_PARAM, domain);
        url
    }

    /// Validates `query` and, if it names a host, asks the service about it.
    ///
    /// An invalid query short-circuits to [`RawResponse::InvalidInput`]
    /// without touching the transport.
    pub async fn fetch(&self, query: &str) -> RawResponse {
        let Some(domain) = validate_domain(query) else {
            warn!(
                "Rejected query '{}': not a domain or URL",
                sanitize_error_message(query)
            );
            return RawResponse::InvalidInput {
                message: invalid_input_message(query),
            };
        };

        let url = self.check_url(&domain);
        debug!("Requesting {}", url);

        match self.transport.get(&url).await {
            Ok(response) if response.is_success() => {
                info!("{} answered {} for {}", SERVICE_HOST, response.status, domain);
                RawResponse::Success {
                    status_code: response.status,
                    html_body: wrap_fragment(&response.body),
                }
            }
            Ok(response) => {
                warn!(
                    "{} answered {} for {}, giving up",
                    SERVICE_HOST, response.status, domain
                );
                RawResponse::RemoteUnreachable {
                    status_code: response.status,
                    message: unreachable_message(),
                }
            }
            Err(source) => {
                warn!("Request to {} failed: {}", url, source);
                RawResponse::TransportError {
                    url: url.to_string(),
                    source,
                }
            }
        }
    }
}
