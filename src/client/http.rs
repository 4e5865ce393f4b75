//! Shared HTTP client, header builders and status handling.

use std::sync::OnceLock;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::error::SenzError;

/// Content type the SENZ API expects on mode updates.
pub const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
///
/// Hosts that already own a connection pool should pass their own client
/// instead; `reqwest::Client` is a cheap handle onto the same pool.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .pool_max_idle_per_host(4)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    })
}

/// Build an `authorization` header value for a bearer token.
pub fn bearer_value(token: &str) -> Result<HeaderValue, SenzError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
        SenzError::Authentication("access token is not a valid header value".to_string())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Headers for a JSON mode update: json-patch content type, JSON accept.
pub fn json_patch_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_PATCH_CONTENT_TYPE));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Headers for an unauthenticated-transport call with a caller-held token.
pub fn bearer_headers(token: &str) -> Result<HeaderMap, SenzError> {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, bearer_value(token)?);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Turn a non-success response into an error, passing successes through.
pub async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response, SenzError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_to_error(status, &body))
}

/// Map an HTTP status and body to an API error.
pub fn status_to_error(status: reqwest::StatusCode, body: &str) -> SenzError {
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.trim().to_string()
    };
    SenzError::api(status.as_u16(), message)
}
