//! Field extractors for raw spreadsheet cell text
//!
//! All of these are total: malformed input degrades to a documented default
//! instead of failing the row.

/// Normalize a boolean-like cell to the SQL literal `"true"` or `"false"`.
///
/// Only "yes", "true" and "1" (case-insensitive, surrounding whitespace
/// ignored) count as true; everything else, including empty text, is false.
pub fn normalize_boolean(value: &str) -> &'static str {
    match value.trim().to_lowercase().as_str() {
        "yes" | "true" | "1" => "true",
        _ => "false",
    }
}

/// Extract the second number from a range like "5-10 mins" and format it as
/// `"0:MM"`.
///
/// Only the number after the dash is kept; the lower bound of the range is
/// discarded. Anything that doesn't match the pattern (no dash, non-numeric
/// token, trailing units glued to the digits) falls back to `"0:00"`.
pub fn extract_prep_minutes(value: &str) -> String {
    let mut parts = value.split('-');
    let _ = parts.next();
    if let Some(second) = parts.next() {
        if let Some(token) = second.trim().split_whitespace().next() {
            if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(minutes) = token.parse::<u64>() {
                    return format!("0:{:02}", minutes);
                }
            }
        }
    }
    "0:00".to_string()
}

/// Escape text for embedding inside a single-quoted SQL string literal.
///
/// Doubles single quotes and backslash-escapes double quotes. This is plain
/// character escaping, not parameterization.
pub fn escape_for_sql(value: &str) -> String {
    value.replace('\'', "''").replace('"', "\\\"")
}
