//! Availability record produced by a successful check.

use serde::{Serialize, Serializer};

use crate::config::NO_RESPONSE;

/// Response time reported by the service.
///
/// The page prints either a number of milliseconds or the literal
/// `no response`; the two never mix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseTime {
    /// Measured response time in milliseconds
    Millis(f64),
    /// The checked site did not answer
    NoResponse,
}

impl ResponseTime {
    /// Milliseconds, if the site answered.
    pub fn as_millis(&self) -> Option<f64> {
        match self {
            ResponseTime::Millis(ms) => Some(*ms),
            ResponseTime::NoResponse => None,
        }
    }
}

impl std::fmt::Display for ResponseTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseTime::Millis(ms) => write!(f, "{ms} ms"),
            ResponseTime::NoResponse => f.write_str(NO_RESPONSE),
        }
    }
}

// Serialized as a bare number or the "no response" marker, matching the page
impl Serialize for ResponseTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResponseTime::Millis(ms) => serializer.serialize_f64(*ms),
            ResponseTime::NoResponse => serializer.serialize_str(NO_RESPONSE),
        }
    }
}

/// Availability of one website as reported by the service.
///
/// At most one of `last_down` and `down_for` is set, depending on which label
/// the page displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityRecord {
    /// `true` iff `status` is exactly `UP`
    #[serde(rename = "up")]
    pub is_up: bool,
    /// Website name as shown by the service
    pub website_name: String,
    /// URL the service checked
    pub url_checked: String,
    /// Response time of the checked site
    pub response_time_ms: ResponseTime,
    /// When the site was last down, if the page showed `Last Down:`
    pub last_down: Option<String>,
    /// How long the site has been down, if the page showed `Down For:`
    pub down_for: Option<String>,
    /// Status word (`UP`, `DOWN`, ...)
    pub status: String,
    /// Free-text message accompanying the status
    pub message: String,
}
