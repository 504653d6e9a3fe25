//! Request media-type negotiation.

use axum::http::{HeaderMap, header::CONTENT_TYPE};

/// Media type required for device check requests.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Returns `true` if the `Content-Type` header declares `media_type`.
///
/// The header may list several comma-separated media types. Parameters such
/// as `charset` are ignored and the comparison is ASCII case-insensitive. A
/// missing or non-UTF-8 header never matches.
///
/// # Examples
///
/// ```
/// use axum::http::{HeaderMap, HeaderValue, header::CONTENT_TYPE};
/// use device_check_service::device_check::adapters::http::has_content_type;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json; charset=utf-8"));
/// assert!(has_content_type(&headers, "application/json"));
/// ```
#[must_use]
pub fn has_content_type(headers: &HeaderMap, media_type: &str) -> bool {
    let Some(declared) = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    declared
        .split(',')
        .filter_map(|entry| entry.split(';').next())
        .map(str::trim)
        .any(|candidate| candidate.eq_ignore_ascii_case(media_type))
}
