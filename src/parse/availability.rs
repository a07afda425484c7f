//! Availability extraction from the service's results page.
//!
//! The service returns an HTML fragment of five sibling `div` blocks. Each
//! field sits at a fixed position; every selector lives in [`PageLayout`] so a
//! markup change on the service only touches this file.
//!
//! | Block | Content |
//! |-------|---------|
//! | 1 | website name (`span`) |
//! | 2 | checked URL (`span`) |
//! | 3 | response time (`span`) |
//! | 4 | `Last Down:` / `Down For:` label (`b`) and value (`span`) |
//! | 5 | status word (`span`) and message (`div`) |

use std::sync::LazyLock;

use log::{debug, warn};
use scraper::{Html, Selector};

use crate::config::{
    LABEL_DOWN_FOR, LABEL_LAST_DOWN, MAX_HTML_PREVIEW_CHARS, NO_RESPONSE, RESPONSE_TIME_UNIT,
    STATUS_UP,
};
use crate::error_handling::MalformedPage;
use crate::models::{AvailabilityRecord, ResponseTime};
use crate::utils::{parse_selector_unsafe, truncate_preview};

// CSS paths (nth-of-type counts only the div children of body, like div[n] in XPath)
const WEBSITE_NAME_PATH: &str = "body > div:nth-of-type(1) > span";
const URL_CHECKED_PATH: &str = "body > div:nth-of-type(2) > span";
const RESPONSE_TIME_PATH: &str = "body > div:nth-of-type(3) > span";
const DOWN_LABEL_PATH: &str = "body > div:nth-of-type(4) > b";
const DOWN_VALUE_PATH: &str = "body > div:nth-of-type(4) > span";
const STATUS_PATH: &str = "body > div:nth-of-type(5) > span";
const MESSAGE_PATH: &str = "body > div:nth-of-type(5) > div";

/// One addressable element of the results page.
struct Slot {
    field: &'static str,
    path: &'static str,
    selector: Selector,
}

impl Slot {
    fn new(field: &'static str, path: &'static str) -> Self {
        Self {
            field,
            path,
            selector: parse_selector_unsafe(path, field),
        }
    }

    /// Trimmed text of the first element at this slot.
    fn text(&self, document: &Html) -> Result<String, MalformedPage> {
        document
            .select(&self.selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .ok_or(MalformedPage::MissingElement {
                field: self.field,
                selector: self.path,
            })
    }
}

/// Positions of every field on the results page.
struct PageLayout {
    website_name: Slot,
    url_checked: Slot,
    response_time: Slot,
    down_label: Slot,
    down_value: Slot,
    status: Slot,
    message: Slot,
}

static LAYOUT: LazyLock<PageLayout> = LazyLock::new(|| PageLayout {
    website_name: Slot::new("website_name", WEBSITE_NAME_PATH),
    url_checked: Slot::new("url_checked", URL_CHECKED_PATH),
    response_time: Slot::new("response_time", RESPONSE_TIME_PATH),
    down_label: Slot::new("down_label", DOWN_LABEL_PATH),
    down_value: Slot::new("down_value", DOWN_VALUE_PATH),
    status: Slot::new("status", STATUS_PATH),
    message: Slot::new("message", MESSAGE_PATH),
});

/// Extracts the availability record from a results page envelope.
///
/// `html` is the service fragment wrapped in `<html><body>...</body></html>`
/// (see [`wrap_fragment`](crate::fetch::wrap_fragment)).
///
/// # Errors
///
/// Returns [`MalformedPage`] if any of the seven elements is missing at its
/// fixed path, or if the response time is neither a number nor `no response`.
pub fn extract_availability(html: &str) -> Result<AvailabilityRecord, MalformedPage> {
    let document = Html::parse_document(html);
    read_record(&document).inspect_err(|e| {
        warn!("Results page does not match the expected layout: {}", e);
        debug!(
            "Page preview: {}",
            truncate_preview(html, MAX_HTML_PREVIEW_CHARS)
        );
    })
}

fn read_record(document: &Html) -> Result<AvailabilityRecord, MalformedPage> {
    let layout = &*LAYOUT;

    let website_name = layout.website_name.text(document)?;
    let url_checked = layout.url_checked.text(document)?;
    let response_time = layout.response_time.text(document)?;
    let down_label = layout.down_label.text(document)?;
    let down_value = layout.down_value.text(document)?;
    let status = layout.status.text(document)?;
    let message = layout.message.text(document)?;

    let response_time_ms = parse_response_time(&response_time)?;
    let (last_down, down_for) = match down_label.as_str() {
        LABEL_LAST_DOWN => (Some(down_value), None),
        LABEL_DOWN_FOR => (None, Some(down_value)),
        other => {
            debug!("Unrecognized block-4 label '{}', leaving outage fields empty", other);
            (None, None)
        }
    };

    debug!(
        "Extracted status '{}' for '{}' ({})",
        status, website_name, response_time_ms
    );

    Ok(AvailabilityRecord {
        is_up: status == STATUS_UP,
        website_name,
        url_checked,
        response_time_ms,
        last_down,
        down_for,
        status,
        message,
    })
}

/// Parses the response time block.
///
/// `no response` maps to [`ResponseTime::NoResponse`]. Otherwise the trailing
/// `ms` unit (optionally followed by a period) is stripped and the rest parsed
/// as a finite float.
pub fn parse_response_time(text: &str) -> Result<ResponseTime, MalformedPage> {
    if text == NO_RESPONSE {
        return Ok(ResponseTime::NoResponse);
    }

    let trimmed = text.trim_end_matches('.').trim_end();
    let number = trimmed
        .strip_suffix(RESPONSE_TIME_UNIT)
        .unwrap_or(trimmed)
        .trim();

    number
        .parse::<f64>()
        .ok()
        .filter(|ms| ms.is_finite())
        .map(ResponseTime::Millis)
        .ok_or_else(|| MalformedPage::InvalidResponseTime {
            text: text.to_string(),
        })
}
