//! isitdown library: availability checks through isitdownrightnow.com
//!
//! This library turns a free-form query (a bare domain or a full URL) into a
//! hostname, asks the availability service about it with a single HTTP GET and
//! scrapes the results page into a typed [`AvailabilityRecord`]. Every failure
//! (bad input, service unreachable, unexpected page layout, transport error) is
//! returned as a [`CheckError`] value rather than a panic.
//!
//! # Example
//!
//! ```no_run
//! use isitdown::{AvailabilityFetcher, Config, IsItDownRightNow};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     user_agent: "my-monitor/1.0".to_string(),
//!     ..Default::default()
//! };
//! let fetcher = AvailabilityFetcher::from_config(&config)?;
//!
//! let check = IsItDownRightNow::check_with("https://google.com/search", &fetcher).await;
//! match check.info() {
//!     Ok(record) => println!("{}: {} ({})", record.website_name, record.status, record.response_time_ms),
//!     Err(e) => eprintln!("{} [{}]", e, e.kind()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Domain validation is available on its own:
//!
//! ```
//! assert_eq!(isitdown::validate_domain("google.com"), Some("google.com".to_string()));
//! assert_eq!(isitdown::validate_domain("https://speedtest.net/results"), Some("speedtest.net".to_string()));
//! assert_eq!(isitdown::validate_domain("not a domain!!"), None);
//! ```
//!
//! # Requirements
//!
//! Checks are async and need a Tokio runtime. Use `#[tokio::main]` in your
//! application or call the library from within an async context.

#![warn(missing_docs)]

mod app;
mod checker;
pub mod config;
mod domain;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
mod parse;
mod utils;

// Re-export public API
pub use app::{exit_code, render_json, render_plain};
pub use checker::IsItDownRightNow;
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel, OutputFormat};
pub use domain::{is_valid_domain, validate_domain};
pub use error_handling::{
    BoxError, CheckError, ErrorCategory, ErrorKind, InitializationError, MalformedPage,
};
pub use fetch::{
    wrap_fragment, AvailabilityFetcher, HttpResponse, RawResponse, ReqwestTransport, Transport,
};
pub use models::{AvailabilityRecord, ResponseTime};
pub use parse::{extract_availability, parse_response_time};
