//! Senz: client for the SENZ WiFi thermostat cloud API
//!
//! Wraps a shared HTTP client and an access-token provider so every request
//! to the vendor API carries a fresh bearer token. On top of that sit the
//! device control calls (target temperature, auto/manual/hold/off modes) and
//! the pre-auth account lookup used while setting up an OAuth2 session.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use senz::prelude::*;
//!
//! # async fn example() -> senz::error::Result<()> {
//! let tokens = Arc::new(StaticTokenProvider::new("access-token"));
//! let auth = SenzAuth::new(senz::client::shared_client().clone(), SENZ_API, tokens);
//! auth.set_mode_hold("ABC123", 2150, "2024-01-01T10:00:00Z").await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;

/// Integration domain name used by hosts to namespace SENZ entries.
pub const DOMAIN: &str = "senz";

/// Base URL of the SENZ WiFi REST API.
pub const SENZ_API: &str = "https://api.senzthermostat.nvent.com/api/v1";

/// OAuth2 authorization endpoint.
pub const OAUTH2_AUTHORIZE: &str = "https://id.senzthermostat.nvent.com/connect/authorize";

/// OAuth2 token endpoint.
pub const OAUTH2_TOKEN: &str = "https://id.senzthermostat.nvent.com/connect/token";
