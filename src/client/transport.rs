//! Authenticated transport: attaches a fresh bearer token to every request.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::Method;
use tracing::debug;

use crate::auth::AccessTokenProvider;
use crate::config::SenzConfig;
use crate::error::SenzError;

use super::control::DEVICE_CONTROL_TIMEOUT;
use super::http::{bearer_value, error_for_status};

/// Authenticated client for the SENZ API.
///
/// Holds a handle onto the host's HTTP client, the API host and the token
/// provider. Nothing else is kept between calls: each request asks the
/// provider for a token, sends once and reports the outcome.
#[derive(Clone)]
pub struct SenzAuth {
    client: reqwest::Client,
    host: String,
    tokens: Arc<dyn AccessTokenProvider>,
    timeout: Duration,
}

impl std::fmt::Debug for SenzAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SenzAuth")
            .field("host", &self.host)
            .field("tokens", &"..")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SenzAuth {
    pub fn new(
        client: reqwest::Client,
        host: impl Into<String>,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            client,
            host: host.into().trim_end_matches('/').to_string(),
            tokens,
            timeout: DEVICE_CONTROL_TIMEOUT,
        }
    }

    /// Build from resolved configuration (API host and control timeout).
    pub fn from_config(
        client: reqwest::Client,
        config: &SenzConfig,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self::new(client, config.api_url.clone(), tokens).with_timeout(config.request_timeout)
    }

    /// Override the bound applied to device control calls.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send an authenticated request to `host + path`.
    ///
    /// Any `authorization` header in `headers` is replaced by one built from
    /// the token the provider returns for this call. Fails without sending if
    /// the provider fails, and fails after sending on a non-2xx status.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        headers: Option<HeaderMap>,
    ) -> Result<reqwest::Response, SenzError> {
        let mut headers = headers.unwrap_or_default();

        let access_token = self.tokens.access_token().await?;
        headers.insert(AUTHORIZATION, bearer_value(&access_token)?);

        let url = format!("{}{}", self.host, path);
        debug!(method = %method, url = %url, "SENZ request");

        let mut request = self.client.request(method.clone(), &url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }
        let response = request.send().await?;

        debug!(method = %method, url = %url, status = response.status().as_u16(), "SENZ response");
        error_for_status(response).await
    }
}
