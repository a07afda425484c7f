//! Configuration constants.
//!
//! This module defines the service endpoint, the messages surfaced to callers,
//! and the literal markers the results page uses.

/// Host name of the availability checking service.
pub const SERVICE_HOST: &str = "isitdownrightnow.com";

/// Default check endpoint. The validated domain is appended as the `domain`
/// query parameter.
pub const DEFAULT_ENDPOINT: &str = "https://www.isitdownrightnow.com/check.php";

/// Name of the single query parameter carrying the hostname.
pub const DOMAIN_QUERY_PARAM: &str = "domain";

/// Default User-Agent string for the outbound request.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Maximum length of a fully qualified domain name.
pub const MAX_DOMAIN_LENGTH: usize = 253;

// Markers printed by the results page
/// Status text that marks a site as up
pub const STATUS_UP: &str = "UP";
/// Response time text used when the site did not answer
pub const NO_RESPONSE: &str = "no response";
/// Block-4 label preceding the last outage timestamp
pub const LABEL_LAST_DOWN: &str = "Last Down:";
/// Block-4 label preceding the current outage duration
pub const LABEL_DOWN_FOR: &str = "Down For:";
/// Unit suffix of the response time text
pub const RESPONSE_TIME_UNIT: &str = "ms";

/// Usage hint appended to invalid-input messages.
pub const USAGE_EXAMPLES: &str = "Usage examples: google.com, speedtest.net, etc..";

// Process exit codes used by the binary
/// A record was extracted
pub const EXIT_OK: i32 = 0;
/// The check itself failed (invalid input, unreachable service, layout change)
pub const EXIT_CHECK_FAILED: i32 = 1;
/// Configuration or initialization failed before any request was made
pub const EXIT_SETUP_FAILED: i32 = 2;

/// Maximum HTML preview length in characters when logging an unreadable page
pub const MAX_HTML_PREVIEW_CHARS: usize = 500;
