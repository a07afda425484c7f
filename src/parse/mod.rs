//! HTML parsing and data extraction.
//!
//! Reads the availability service's results page into an
//! [`AvailabilityRecord`](crate::AvailabilityRecord). All parsing is done using
//! CSS selectors via the `scraper` crate.

mod availability;

// Re-export public API
pub use availability::{extract_availability, parse_response_time};
