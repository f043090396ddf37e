//! Reason phrases for HTTP status codes.

use reqwest::StatusCode;

/// Returns the canonical reason phrase for `status`, or an empty string for
/// codes without one.
pub fn status_text(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
        .to_string()
}
