//! The token-provider seam used by the authenticated transport.

use async_trait::async_trait;

use super::error::AuthError;

/// Supplies a currently valid access token, refreshing it first if needed.
///
/// The transport calls this once per request and never caches the result,
/// so implementations decide when a refresh is due.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, AuthError>;
}

/// Provider that always returns the same token.
///
/// Useful for scripts holding a token obtained elsewhere, and for tests.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"..")
            .finish()
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String, AuthError> {
        if self.token.is_empty() {
            return Err(AuthError::NotLoggedIn);
        }
        Ok(self.token.clone())
    }
}
