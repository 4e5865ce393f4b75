//! Account lookup used during setup, before an OAuth session exists.

use tracing::debug;

use crate::error::SenzError;
use crate::SENZ_API;

use super::http::{bearer_headers, error_for_status};

/// Minimal client for calls made with a token the caller already holds.
#[derive(Debug, Clone)]
pub struct PreAuthClient {
    client: reqwest::Client,
    base_url: String,
}

impl PreAuthClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, SENZ_API)
    }

    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the account behind `access_token` from `GET /Account`.
    pub async fn get_account(&self, access_token: &str) -> Result<serde_json::Value, SenzError> {
        let url = format!("{}/Account", self.base_url);
        debug!(url = %url, "Fetching SENZ account");
        let response = self
            .client
            .get(&url)
            .headers(bearer_headers(access_token)?)
            .send()
            .await?;
        let body = error_for_status(response).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
