// Parse module tests.

use super::*;
use crate::error_handling::MalformedPage;
use crate::fetch::wrap_fragment;
use crate::models::ResponseTime;

const GOOGLE_UP: &str = include_str!("../../tests/fixtures/google_up.html");
const EXAMPLE_DOWN: &str = include_str!("../../tests/fixtures/example_down.html");
const MISSING_BLOCK_FOUR: &str = include_str!("../../tests/fixtures/missing_block_four.html");

/// Builds a results fragment with the given block texts.
fn fragment(response_time: &str, label: &str, value: &str, status: &str) -> String {
    format!(
        r#"<div><b>Website Name:</b> <span>Site</span></div>
<div><b>URL Checked:</b> <span>site.example</span></div>
<div><b>Response Time:</b> <span>{response_time}</span></div>
<div><b>{label}</b> <span>{value}</span></div>
<div><span>{status}</span><div>Status message.</div></div>"#
    )
}

fn extract(fragment: &str) -> Result<crate::models::AvailabilityRecord, MalformedPage> {
    extract_availability(&wrap_fragment(fragment))
}

#[test]
fn test_extract_up_page() {
    let record = extract(GOOGLE_UP).expect("fixture should parse");
    assert!(record.is_up);
    assert_eq!(record.website_name, "Google");
    assert_eq!(record.url_checked, "google.com");
    assert_eq!(record.response_time_ms, ResponseTime::Millis(123.0));
    assert_eq!(record.last_down.as_deref(), Some("3 hours ago"));
    assert_eq!(record.down_for, None);
    assert_eq!(record.status, "UP");
    assert_eq!(record.message, "It is up. It's just you.");
}

#[test]
fn test_extract_down_page() {
    let record = extract(EXAMPLE_DOWN).expect("fixture should parse");
    assert!(!record.is_up);
    assert_eq!(record.status, "DOWN");
    assert_eq!(record.response_time_ms, ResponseTime::NoResponse);
    assert_eq!(record.last_down, None);
    assert_eq!(record.down_for.as_deref(), Some("2 hours 15 minutes"));
    assert_eq!(
        record.message,
        "It's not just you! example.com is down for everyone."
    );
}

#[test]
fn test_is_up_requires_exact_status() {
    for (status, expected) in [("UP", true), ("DOWN", false), ("up", false), ("UNKNOWN", false)] {
        let record = extract(&fragment("10 ms", "Last Down:", "never", status)).unwrap();
        assert_eq!(record.is_up, expected, "status {status}");
        assert_eq!(record.status, status);
    }
}

#[test]
fn test_last_down_label() {
    let record = extract(&fragment("10 ms", "Last Down:", "3 hours ago", "UP")).unwrap();
    assert_eq!(record.last_down.as_deref(), Some("3 hours ago"));
    assert_eq!(record.down_for, None);
}

#[test]
fn test_down_for_label() {
    let record = extract(&fragment("10 ms", "Down For:", "3 hours", "DOWN")).unwrap();
    assert_eq!(record.last_down, None);
    assert_eq!(record.down_for.as_deref(), Some("3 hours"));
}

#[test]
fn test_unknown_label_sets_neither_outage_field() {
    let record = extract(&fragment("10 ms", "Uptime:", "99%", "UP")).unwrap();
    assert_eq!(record.last_down, None);
    assert_eq!(record.down_for, None);
}

#[test]
fn test_missing_block_four_is_malformed() {
    let err = extract(MISSING_BLOCK_FOUR).unwrap_err();
    assert_eq!(
        err,
        MalformedPage::MissingElement {
            field: "down_label",
            selector: "body > div:nth-of-type(4) > b",
        }
    );
}

#[test]
fn test_missing_span_in_block_one_is_malformed() {
    let html = GOOGLE_UP.replacen(r#"<span class="tab">Google</span>"#, "Google", 1);
    match extract(&html) {
        Err(MalformedPage::MissingElement { field, .. }) => assert_eq!(field, "website_name"),
        other => panic!("expected missing website_name, got {other:?}"),
    }
}

#[test]
fn test_unrelated_page_is_malformed() {
    let html = "<html><head><title>Oops</title></head><body><p>Service temporarily down</p></body></html>";
    assert!(matches!(
        extract_availability(html),
        Err(MalformedPage::MissingElement { field: "website_name", .. })
    ));
}

#[test]
fn test_empty_body_is_malformed() {
    assert!(extract("").is_err());
}

#[test]
fn test_non_div_siblings_do_not_shift_positions() {
    let html = format!("<p>banner</p>{GOOGLE_UP}");
    let record = extract(&html).unwrap();
    assert_eq!(record.website_name, "Google");
    assert!(record.is_up);
}

#[test]
fn test_element_text_is_trimmed_and_decoded() {
    let html = GOOGLE_UP.replacen(
        r#"<span class="tab">Google</span>"#,
        "<span class=\"tab\">\n   Ben &amp; Jerry's  \n</span>",
        1,
    );
    let record = extract(&html).unwrap();
    assert_eq!(record.website_name, "Ben & Jerry's");
}

#[test]
fn test_parse_response_time_values() {
    assert_eq!(parse_response_time("123 ms"), Ok(ResponseTime::Millis(123.0)));
    assert_eq!(parse_response_time("0.45 ms"), Ok(ResponseTime::Millis(0.45)));
    assert_eq!(parse_response_time("87 ms."), Ok(ResponseTime::Millis(87.0)));
    assert_eq!(parse_response_time("87ms"), Ok(ResponseTime::Millis(87.0)));
    assert_eq!(parse_response_time("no response"), Ok(ResponseTime::NoResponse));
}

#[test]
fn test_parse_response_time_rejects_garbage() {
    for text in ["", "ms", "fast", "NaN ms", "inf ms", "No Response"] {
        assert_eq!(
            parse_response_time(text),
            Err(MalformedPage::InvalidResponseTime {
                text: text.to_string()
            }),
            "{text:?}"
        );
    }
}

#[test]
fn test_invalid_response_time_fails_extraction() {
    let err = extract(&fragment("soon", "Last Down:", "never", "UP")).unwrap_err();
    assert!(matches!(err, MalformedPage::InvalidResponseTime { .. }));
}
