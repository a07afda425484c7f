//! Error type definitions.
//!
//! This module defines the errors a check can end in, plus the setup errors
//! raised while building the logger and the HTTP client.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{AsRefStr, EnumIter};
use thiserror::Error;

/// Boxed error returned by a [`Transport`](crate::Transport).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configuration failed validation.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigValidationError),
}

/// The results page did not have the layout the extractor expects.
///
/// This signals that the service changed its markup; it is never swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedPage {
    /// No element at the fixed positional path.
    #[error("no {field} element at `{selector}`")]
    MissingElement {
        /// Record field the element feeds
        field: &'static str,
        /// CSS path that matched nothing
        selector: &'static str,
    },

    /// The response time block held neither a number nor the no-response marker.
    #[error("response time '{text}' is not a number of milliseconds")]
    InvalidResponseTime {
        /// Raw text of the block
        text: String,
    },
}

/// Why a check did not produce an availability record.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The query is neither a domain nor a URL with a host.
    #[error("{message}")]
    InvalidInput {
        /// Original query
        input: String,
        /// Human-readable message echoing the query
        message: String,
    },

    /// The service answered with a non-success HTTP status.
    #[error("{message} (HTTP {status_code})")]
    RemoteUnreachable {
        /// HTTP status returned by the service
        status_code: u16,
        /// Human-readable message naming the service
        message: String,
    },

    /// The results page could not be read at its fixed positions.
    #[error("Unexpected results page layout: {0}")]
    MalformedPage(#[from] MalformedPage),

    /// The request never produced an HTTP response.
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// URL that was requested
        url: String,
        /// Underlying network error
        #[source]
        source: BoxError,
    },
}

/// Discriminant of [`CheckError`], used as the `error` tag in JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// See [`CheckError::InvalidInput`]
    InvalidInput,
    /// See [`CheckError::RemoteUnreachable`]
    RemoteUnreachable,
    /// See [`CheckError::MalformedPage`]
    MalformedPage,
    /// See [`CheckError::Transport`]
    Transport,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// High-level classification for log filtering and exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller supplied something unusable
    Input,
    /// The service or the network failed
    Network,
    /// The service answered but its page could not be read
    Parse,
}

impl ErrorKind {
    /// Category this kind belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::InvalidInput => ErrorCategory::Input,
            ErrorKind::RemoteUnreachable | ErrorKind::Transport => ErrorCategory::Network,
            ErrorKind::MalformedPage => ErrorCategory::Parse,
        }
    }
}

impl CheckError {
    /// Tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::InvalidInput { .. } => ErrorKind::InvalidInput,
            CheckError::RemoteUnreachable { .. } => ErrorKind::RemoteUnreachable,
            CheckError::MalformedPage(_) => ErrorKind::MalformedPage,
            CheckError::Transport { .. } => ErrorKind::Transport,
        }
    }

    /// Category of this error.
    pub fn category(&self) -> ErrorCategory {
        self.kind().category()
    }

    /// HTTP status returned by the service, when there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CheckError::RemoteUnreachable { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
