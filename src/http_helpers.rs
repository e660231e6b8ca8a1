//! HTTP helper functions for Crux Core
//!
//! This module extracts common HTTP response handling logic from macros
//! into debuggable, testable functions.

use crux_http::Response;

use crate::types::ErrorResponse;

/// Base URL for the auth API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` (v0.16.0-rc2)
/// requires absolute URLs and rejects relative paths
/// (`RelativeUrlWithoutBase` error). The UI shell strips this prefix before
/// sending requests via `fetch()`, making them relative to the page origin.
/// Using https:// to prevent any potential mixed content warnings on HTTPS
/// pages.
pub const BASE_URL: &str = "https://relative";

/// Message shown when the request itself fails or a response body cannot be
/// interpreted.
pub const GENERIC_REQUEST_ERROR: &str = "An error occurred. Please try again.";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use auth_ui_core::http_helpers::build_url;
/// let url = build_url("/login");
/// assert_eq!(url, "https://relative/login");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Extract the server-provided error message from a failed response.
///
/// The backend reports failures as `{"detail": "..."}`. A JSON body without
/// a `detail` falls back to `"<action> failed"`; a body that cannot be read
/// as JSON is treated like a transport failure.
pub fn extract_error_detail(action: &str, response: &mut Response<Vec<u8>>) -> String {
    match response.take_body() {
        Some(body) => match serde_json::from_slice::<ErrorResponse>(&body) {
            Ok(ErrorResponse {
                detail: Some(detail),
            }) => detail,
            Ok(ErrorResponse { detail: None }) => format!("{action} failed"),
            Err(_) => GENERIC_REQUEST_ERROR.to_string(),
        },
        None => GENERIC_REQUEST_ERROR.to_string(),
    }
}

/// Parse JSON from a successful response body.
///
/// A body that does not deserialize into `T` is reported with the generic
/// message; nothing distinguishes it from a transport failure for the user.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: &mut Response<Vec<u8>>,
) -> Result<T, String> {
    match response.take_body() {
        Some(body) => serde_json::from_slice(&body).map_err(|e| {
            log::error!("Unreadable response body: {e}");
            GENERIC_REQUEST_ERROR.to_string()
        }),
        None => Err(GENERIC_REQUEST_ERROR.to_string()),
    }
}

/// Process an auth endpoint response.
///
/// 2xx bodies must parse as `T`; non-2xx bodies surface the server's
/// `detail` when present. Transport errors and unreadable bodies collapse
/// into [`GENERIC_REQUEST_ERROR`].
pub fn process_auth_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => {
            if is_response_success(&response) {
                parse_json_response(&mut response)
            } else {
                Err(extract_error_detail(action, &mut response))
            }
        }
        Err(e) => {
            log::error!("{action} request failed: {e}");
            Err(GENERIC_REQUEST_ERROR.to_string())
        }
    }
}

// Note: Unit tests for these helpers are not included because
// crux_http::Response has a private constructor. They are exercised
// end-to-end by the update tests, which resolve protocol-level responses
// through the command runtime.
