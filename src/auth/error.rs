use thiserror::Error;

use crate::error::SenzError;

/// Failures reported by an access-token provider.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Not logged in")]
    NotLoggedIn,
    #[error("Expired or invalid grant")]
    ExpiredOrInvalidGrant,
    #[error("Token refresh failed: {0}")]
    RefreshFailed(String),
    #[error("Invalid access token: {0}")]
    InvalidToken(String),
}

impl From<AuthError> for SenzError {
    fn from(error: AuthError) -> Self {
        SenzError::Authentication(error.to_string())
    }
}
