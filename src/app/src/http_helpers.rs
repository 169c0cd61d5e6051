//! HTTP helper functions for the Crux Core
//!
//! Response handling shared by the request macros, kept as plain functions so
//! they can be debugged and tested.

use crux_http::{http::StatusCode, Response};

/// Base URL for device API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires absolute
/// URLs and rejects relative paths. Shells strip it and send the request to
/// the device they are talking to.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use wifi_setup_core::http_helpers::build_url;
/// let url = build_url("/scan");
/// assert_eq!(url, "https://relative/scan");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Strips the dummy prefix again, giving the endpoint path (shell side).
///
/// URLs without the prefix are returned unchanged.
pub fn endpoint_of(url: &str) -> &str {
    url.strip_prefix(BASE_URL).unwrap_or(url)
}

/// The device only answers 200 on success; anything else is a failure.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status() == StatusCode::Ok
}

/// Extracts error message from HTTP response.
pub fn extract_error_message(action: &str, response: &mut Response<Vec<u8>>) -> String {
    let status = response.status().to_string();

    match response.take_body() {
        Some(body) => {
            if body.is_empty() {
                format!("{action} failed: HTTP {status} (Empty body)")
            } else {
                match String::from_utf8(body) {
                    Ok(msg) => format!("{action} failed: HTTP {status}: {msg}"),
                    Err(e) => format!("{action} failed: HTTP {status} (Invalid UTF-8: {e})"),
                }
            }
        }
        None => format!("{action} failed: HTTP {status} (No body)"),
    }
}

/// Parse JSON from response body.
///
/// Returns error if response is not successful or JSON parsing fails.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, String> {
    if !is_response_success(response) {
        return Err(extract_error_message(action, response));
    }

    match response.take_body() {
        Some(body) => {
            serde_json::from_slice(&body).map_err(|e| format!("{action}: JSON parse error: {e}"))
        }
        None => Err(format!("{action}: Empty response body")),
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(format!("{action} failed: {e}")),
    }
}
