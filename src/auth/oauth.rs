//! Token provider backed by a host-managed OAuth2 session.

use async_trait::async_trait;
use tracing::debug;

use super::error::AuthError;
use super::provider::AccessTokenProvider;
use super::token::Token;

/// The host's OAuth2 session for one configured account.
///
/// Storage and the refresh grant itself live in the host; the client only
/// asks whether the current token is usable and, if not, asks the session to
/// make it so.
#[async_trait]
pub trait OAuthSession: Send + Sync {
    /// Whether the held token can be used as-is.
    fn valid_token(&self) -> bool;

    /// Refresh the held token if it is expired or about to expire.
    async fn ensure_token_valid(&self) -> Result<(), AuthError>;

    /// The token currently held by the session.
    fn token(&self) -> Result<Token, AuthError>;
}

/// Access-token provider tied to an OAuth2-based config entry.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use senz::auth::{ConfigEntryAuth, OAuthSession};
/// use senz::client::{shared_client, SenzAuth};
///
/// fn build(session: impl OAuthSession + 'static) -> SenzAuth {
///     let tokens = Arc::new(ConfigEntryAuth::new(session));
///     SenzAuth::new(shared_client().clone(), senz::SENZ_API, tokens)
/// }
/// ```
pub struct ConfigEntryAuth<S> {
    session: S,
}

impl<S: OAuthSession> ConfigEntryAuth<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &S {
        &self.session
    }
}

#[async_trait]
impl<S: OAuthSession> AccessTokenProvider for ConfigEntryAuth<S> {
    async fn access_token(&self) -> Result<String, AuthError> {
        if !self.session.valid_token() || self.session.token()?.is_expired() {
            debug!("OAuth token not valid, asking session to refresh");
            self.session.ensure_token_valid().await?;
        }

        let token = self.session.token()?;
        if token.access_token.is_empty() {
            return Err(AuthError::InvalidToken(
                "session token has no access_token".to_string(),
            ));
        }
        Ok(token.access_token)
    }
}
