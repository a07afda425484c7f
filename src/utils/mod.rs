//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Text sanitization for echoed input and log previews

pub mod sanitize;
mod selector;

pub use sanitize::{sanitize_error_message, truncate_preview};
pub use selector::parse_selector_unsafe;
