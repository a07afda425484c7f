//! Single entry point for an availability check.
//!
//! [`IsItDownRightNow`] validates the query, fetches the results page once and,
//! only when the service answered successfully, extracts the availability
//! record. Every outcome is kept as data behind [`IsItDownRightNow::info`].

use std::fmt;

use log::debug;

use crate::config::Config;
use crate::domain::validate_domain;
use crate::error_handling::{CheckError, InitializationError};
use crate::fetch::{AvailabilityFetcher, RawResponse, Transport};
use crate::models::AvailabilityRecord;
use crate::parse::extract_availability;

/// Result of asking the availability service about one query.
///
/// # Example
///
/// ```no_run
/// use isitdown::IsItDownRightNow;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let check = IsItDownRightNow::check("google.com").await?;
/// match check.info() {
///     Ok(record) => println!("{} is {}", record.website_name, record.status),
///     Err(e) => eprintln!("check failed: {e}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct IsItDownRightNow {
    query: String,
    domain: Option<String>,
    info: Result<AvailabilityRecord, CheckError>,
}

impl IsItDownRightNow {
    /// Checks `query` against the public service with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an [`InitializationError`] if the HTTP client cannot be built.
    /// Failures of the check itself are reported through [`info`](Self::info).
    pub async fn check(query: impl Into<String>) -> Result<Self, InitializationError> {
        let fetcher = AvailabilityFetcher::from_config(&Config::default())?;
        Ok(Self::check_with(query, &fetcher).await)
    }

    /// Checks `query` through an explicit fetcher.
    pub async fn check_with<T: Transport>(
        query: impl Into<String>,
        fetcher: &AvailabilityFetcher<T>,
    ) -> Self {
        let query = query.into();
        let domain = validate_domain(&query);

        let info = match fetcher.fetch(&query).await {
            RawResponse::Success { html_body, .. } => {
                extract_availability(&html_body).map_err(CheckError::from)
            }
            RawResponse::RemoteUnreachable {
                status_code,
                message,
            } => Err(CheckError::RemoteUnreachable {
                status_code,
                message,
            }),
            RawResponse::InvalidInput { message } => Err(CheckError::InvalidInput {
                input: query.clone(),
                message,
            }),
            RawResponse::TransportError { url, source } => {
                Err(CheckError::Transport { url, source })
            }
        };

        if let Err(e) = &info {
            debug!("Check of '{}' ended in {}", query, e.kind());
        }

        Self {
            query,
            domain,
            info,
        }
    }

    /// The availability record, or why there is none.
    pub fn info(&self) -> Result<&AvailabilityRecord, &CheckError> {
        self.info.as_ref()
    }

    /// Consumes the check, returning the owned outcome.
    pub fn into_info(self) -> Result<AvailabilityRecord, CheckError> {
        self.info
    }

    /// The query as given.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Hostname sent to the service, if the query was valid.
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }
}

impl fmt::Display for IsItDownRightNow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.domain {
            Some(domain) => write!(f, "IsItDownRightNow('{domain}')"),
            None => f.write_str("IsItDownRightNow()"),
        }
    }
}
