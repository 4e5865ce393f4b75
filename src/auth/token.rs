use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OAuth token payload held by the host's OAuth2 session.
///
/// # Example
/// ```no_run
/// use senz::auth::Token;
/// use chrono::{Duration, Utc};
///
/// let token = Token {
///     access_token: "access".to_string(),
///     refresh_token: Some("refresh".to_string()),
///     expires_at: Some(Utc::now() + Duration::hours(1)),
///     scopes: Some(vec!["restapi".to_string(), "offline_access".to_string()]),
/// };
/// assert!(!token.is_expired());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub scopes: Option<Vec<String>>,
}

impl Token {
    /// Token with only an access token and no known expiry.
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            expires_at: None,
            scopes: None,
        }
    }

    /// Whether the token is past its expiry. Tokens without one never expire.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| exp <= Utc::now())
    }
}
