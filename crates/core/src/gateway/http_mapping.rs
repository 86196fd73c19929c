//! Pure functions for mapping HTTP error responses to [`GatewayError`].
//!
//! Following the Functional Core pattern, the HTTP gateway only hands the
//! status code and raw body over; everything about how a failure reads to the
//! user is decided here.

use serde_json::Value;

use super::GatewayError;

/// Message used when the error body is absent or carries no usable `detail`.
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// Returns true if the status means the credential was rejected.
pub fn is_auth_failure(status: u16) -> bool {
    status == 401
}

/// Extracts the user-facing message from an error body.
///
/// - `{"detail": "..."}` -> the string
/// - `{"detail": [{"msg": "..."}, ...]}` (request validation errors) -> the
///   messages joined with `"; "`
/// - anything else -> `None`
///
/// # Examples
///
/// ```
/// use studytrack_core::gateway::extract_detail;
///
/// assert_eq!(extract_detail(r#"{"detail":"Course not found"}"#), Some("Course not found".to_string()));
/// assert_eq!(extract_detail("<html>Bad Gateway</html>"), None);
/// ```
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

/// Maps a non-success response to a [`GatewayError`].
///
/// # Examples
///
/// ```
/// use studytrack_core::gateway::{error_from_response, GatewayError};
///
/// let error = error_from_response(404, r#"{"detail":"Course not found"}"#);
/// assert_eq!(error, GatewayError::Rejected { status: 404, detail: "Course not found".to_string() });
/// assert_eq!(error_from_response(500, "").to_string(), "Request failed");
/// ```
pub fn error_from_response(status: u16, body: &str) -> GatewayError {
    let detail = extract_detail(body).unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
    if is_auth_failure(status) {
        GatewayError::Unauthorized { detail }
    } else {
        GatewayError::Rejected { status, detail }
    }
}
