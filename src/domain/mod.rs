//! Domain validation and normalization.
//!
//! Turns a free-form query (bare domain or full URL) into the bare hostname the
//! availability service expects.
//!
//! Key functions:
//! - `validate_domain()` - Normalizes a query to a hostname, or `None`
//! - `is_valid_domain()` - Strict domain-name syntax check

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use url::{Host, Url};

use crate::config::MAX_DOMAIN_LENGTH;

/// Dot-separated labels of letters, digits, `-` and `_`, at most 63 characters
/// each, not starting or ending with `-`, and a TLD that ends in a letter.
const DOMAIN_PATTERN: &str =
    r"^(?:[A-Za-z0-9](?:[A-Za-z0-9_-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z0-9][A-Za-z0-9_-]{0,61}[A-Za-z]$";

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DOMAIN_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile domain pattern '{}': {}. This is a programming error.",
            DOMAIN_PATTERN, e
        )
    })
});

/// Checks whether `input` is a syntactically valid bare domain name.
///
/// Internationalized names are checked in their punycode form, so
/// `münchen.de` is accepted as well as `xn--mnchen-3ya.de`.
pub fn is_valid_domain(input: &str) -> bool {
    if input.is_ascii() {
        return input.len() <= MAX_DOMAIN_LENGTH && DOMAIN_RE.is_match(input);
    }

    // Only a real IDN gets here; anything with spaces or punctuation fails to parse
    match Host::parse(input) {
        Ok(Host::Domain(ascii)) => ascii.len() <= MAX_DOMAIN_LENGTH && DOMAIN_RE.is_match(&ascii),
        _ => false,
    }
}

/// Normalizes a query into the hostname sent to the availability service.
///
/// 1. A valid bare domain is returned unchanged.
/// 2. A well-formed absolute URL with a non-empty host yields that host, with
///    scheme, credentials, port, path and query stripped.
/// 3. Anything else yields `None`, including URLs with embedded or
///    surrounding whitespace or control characters.
///
/// Never panics and never touches the network.
///
/// # Examples
///
/// ```
/// use isitdown::validate_domain;
///
/// assert_eq!(validate_domain("example.com").as_deref(), Some("example.com"));
/// assert_eq!(
///     validate_domain("https://example.com/a/b?q=1").as_deref(),
///     Some("example.com")
/// );
/// assert_eq!(validate_domain("not a domain!!"), None);
/// ```
pub fn validate_domain(input: &str) -> Option<String> {
    if is_valid_domain(input) {
        return Some(input.to_string());
    }

    // The URL parser strips tabs, newlines and outer spaces; such input is not well-formed
    if input.trim() != input || input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        debug!("'{}' contains whitespace or control characters", input.escape_debug());
        return None;
    }

    match Url::parse(input) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => Some(host.to_string()),
            _ => {
                debug!("URL '{}' has no host component", input);
                None
            }
        },
        Err(e) => {
            debug!("'{}' is neither a domain nor a URL: {}", input, e);
            None
        }
    }
}
