//! Rendering of a finished check for the terminal.

use serde_json::{json, Value};

use crate::checker::IsItDownRightNow;
use crate::config::{EXIT_CHECK_FAILED, EXIT_OK};
use crate::error_handling::CheckError;
use crate::models::AvailabilityRecord;
use crate::utils::sanitize_error_message;

/// Renders the check as aligned `label: value` lines.
pub fn render_plain(check: &IsItDownRightNow) -> String {
    match check.info() {
        Ok(record) => render_record_plain(record),
        Err(e) => format!("Error: {}", sanitize_error_message(&e.to_string())),
    }
}

fn render_record_plain(record: &AvailabilityRecord) -> String {
    let mut lines = vec![
        ("Website", record.website_name.clone()),
        ("URL checked", record.url_checked.clone()),
        ("Status", record.status.clone()),
        ("Response time", record.response_time_ms.to_string()),
    ];
    if let Some(last_down) = &record.last_down {
        lines.push(("Last down", last_down.clone()));
    }
    if let Some(down_for) = &record.down_for {
        lines.push(("Down for", down_for.clone()));
    }
    lines.push(("Message", record.message.clone()));

    lines
        .iter()
        .map(|(label, value)| format!("{:<15}{}", format!("{label}:"), value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the check as one JSON object.
///
/// A record serializes with its own keys; a failure becomes
/// `{"status": false, "error": <kind>, "message": ..}` plus `status_code`
/// when the service answered.
pub fn render_json(check: &IsItDownRightNow) -> Value {
    match check.info() {
        Ok(record) => serde_json::to_value(record).unwrap_or_else(|e| {
            log::error!("Failed to serialize record: {}", e);
            Value::Null
        }),
        Err(e) => error_json(e),
    }
}

fn error_json(e: &CheckError) -> Value {
    // status_code has its own key
    let message = match e {
        CheckError::InvalidInput { message, .. }
        | CheckError::RemoteUnreachable { message, .. } => message.clone(),
        other => other.to_string(),
    };
    let mut value = json!({
        "status": false,
        "error": e.kind().as_ref(),
        "message": message,
    });
    if let (Some(code), Some(map)) = (e.status_code(), value.as_object_mut()) {
        map.insert("status_code".to_string(), json!(code));
    }
    value
}

/// Process exit code for a finished check.
pub fn exit_code(check: &IsItDownRightNow) -> i32 {
    if check.info().is_ok() {
        EXIT_OK
    } else {
        EXIT_CHECK_FAILED
    }
}
