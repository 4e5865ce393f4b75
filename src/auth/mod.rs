//! Access-token provision for authenticated requests.

pub mod error;
pub mod oauth;
pub mod provider;
pub mod token;

pub use error::AuthError;
pub use oauth::{ConfigEntryAuth, OAuthSession};
pub use provider::{AccessTokenProvider, StaticTokenProvider};
pub use token::Token;
