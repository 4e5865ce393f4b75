//! Where a caller-held access token comes from.

use serde::{Deserialize, Serialize};

use crate::auth::StaticTokenProvider;
use crate::error::SenzError;

/// Environment variable read for the access token when none is given.
pub const ACCESS_TOKEN_ENV: &str = "SENZ_ACCESS_TOKEN";

/// A bearer token, given directly or by environment variable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TokenSource {
    BearerToken(String),
    EnvVar(String),
}

impl Default for TokenSource {
    fn default() -> Self {
        Self::EnvVar(ACCESS_TOKEN_ENV.to_string())
    }
}

impl TokenSource {
    /// Explicit token if given, otherwise the default environment variable.
    pub fn from_arg(token: Option<String>) -> Self {
        token.map(Self::BearerToken).unwrap_or_default()
    }

    /// Resolve to the actual token string.
    pub fn resolve(&self) -> Result<String, SenzError> {
        let token = match self {
            Self::BearerToken(t) => t.clone(),
            Self::EnvVar(var) => std::env::var(var).map_err(|_| {
                SenzError::Authentication(format!("Environment variable {var} not set"))
            })?,
        };
        if token.trim().is_empty() {
            return Err(SenzError::Authentication("access token is empty".to_string()));
        }
        Ok(token.trim().to_string())
    }

    /// Resolve once into a provider that keeps returning that token.
    pub fn into_provider(self) -> Result<StaticTokenProvider, SenzError> {
        Ok(StaticTokenProvider::new(self.resolve()?))
    }
}
