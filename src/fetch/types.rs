//! Outcome of the outbound call.

use crate::error_handling::BoxError;

/// Classified result of one fetch.
///
/// Created once per query and never modified.
#[derive(Debug)]
pub enum RawResponse {
    /// The service answered 2xx; `html_body` is the fragment wrapped in an
    /// `<html><body>` envelope.
    Success {
        /// HTTP status code
        status_code: u16,
        /// Parseable results page
        html_body: String,
    },
    /// The service answered with a non-success status.
    RemoteUnreachable {
        /// HTTP status code
        status_code: u16,
        /// Message naming the service
        message: String,
    },
    /// The query was rejected before any request was made.
    InvalidInput {
        /// Message echoing the query
        message: String,
    },
    /// No HTTP response was received.
    TransportError {
        /// URL that was requested
        url: String,
        /// Underlying network error
        source: BoxError,
    },
}
