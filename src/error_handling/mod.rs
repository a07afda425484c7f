//! Error handling.
//!
//! Errors are returned as data. A check ends in exactly one of:
//! - **Input**: the query is not a domain (`InvalidInput`)
//! - **Network**: the service answered non-2xx (`RemoteUnreachable`) or the
//!   request failed outright (`Transport`)
//! - **Parse**: the results page changed layout (`MalformedPage`)

mod types;

// Re-export public API
pub use types::{
    BoxError, CheckError, ErrorCategory, ErrorKind, InitializationError, MalformedPage,
};
