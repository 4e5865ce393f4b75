//! Convenience re-exports for common use.

pub use crate::auth::{AccessTokenProvider, AuthError, ConfigEntryAuth, OAuthSession, StaticTokenProvider, Token};
pub use crate::client::{ModeCommand, PreAuthClient, SenzAuth, ThermostatMode, OFF_TEMPERATURE};
pub use crate::config::{SenzConfig, TokenSource};
pub use crate::error::{Result, SenzError};
pub use crate::SENZ_API;
