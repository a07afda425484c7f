//! Utilities for sanitizing text before it reaches a terminal or a log line.
//!
//! Queries are echoed back in error messages and page fragments are logged
//! when extraction fails; both come from outside the process.

/// Removes control characters from `message`.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return, and DEL)
/// are dropped. Non-ASCII text is preserved.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            (code >= 0x20 && code != 0x7F) // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .collect()
}

/// Shortens `text` to at most `max_chars` characters for logging.
///
/// Cuts on a character boundary and appends the original length when
/// anything was removed.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    let total = text.chars().count();
    if total <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{head}... (truncated, original length: {total} chars)")
}
