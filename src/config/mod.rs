//! Configuration (layered: defaults < config file < env < code).

pub mod auth;

pub use auth::TokenSource;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::DEVICE_CONTROL_TIMEOUT;
use crate::error::SenzError;
use crate::{OAUTH2_AUTHORIZE, OAUTH2_TOKEN, SENZ_API};

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenzConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_url: String,
    /// OAuth2 authorize endpoint for the host's login flow. The client never calls it.
    pub authorize_url: String,
    /// OAuth2 token endpoint for the host's refresh grant. The client never calls it.
    pub token_url: String,
    /// Bound on each device control call.
    pub request_timeout: Duration,
}

impl Default for SenzConfig {
    fn default() -> Self {
        Self {
            api_url: SENZ_API.to_string(),
            authorize_url: OAUTH2_AUTHORIZE.to_string(),
            token_url: OAUTH2_TOKEN.to_string(),
            request_timeout: DEVICE_CONTROL_TIMEOUT,
        }
    }
}

/// On-disk form of the config file. Every field is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_url: Option<String>,
    authorize_url: Option<String>,
    token_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl SenzConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by environment variables (`.env` is loaded if present).
    pub fn from_env() -> Result<Self, SenzError> {
        let mut config = Self::new();
        config.apply_env()?;
        Ok(config)
    }

    /// Default config file path (`~/.senz/config.toml`).
    pub fn default_config_path() -> PathBuf {
        directories::UserDirs::new()
            .map(|dirs| dirs.home_dir().join(".senz"))
            .unwrap_or_else(|| PathBuf::from(".senz"))
            .join("config.toml")
    }

    /// Defaults overridden by a TOML file.
    ///
    /// A missing file yields the defaults.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SenzError> {
        let path = path.as_ref();
        let raw = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(err) => return Err(SenzError::Io(err)),
        };
        let file: ConfigFile = toml::from_str(&raw).map_err(|e| {
            SenzError::Configuration(format!("Invalid config file {}: {e}", path.display()))
        })?;

        let mut config = Self::new();
        if let Some(url) = file.api_url {
            config.set_api_url(url);
        }
        if let Some(url) = file.authorize_url {
            config.authorize_url = url;
        }
        if let Some(url) = file.token_url {
            config.token_url = url;
        }
        if let Some(secs) = file.request_timeout_secs {
            config.set_request_timeout(Duration::from_secs(secs))?;
        }
        Ok(config)
    }

    /// Full layering: defaults, then the file at `path` (or the default
    /// path), then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, SenzError> {
        let default_path;
        let path = match path {
            Some(p) => p,
            None => {
                default_path = Self::default_config_path();
                default_path.as_path()
            }
        };
        let mut config = Self::load_from_path(path)?;
        config.apply_env()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<(), SenzError> {
        let _ = dotenvy::dotenv();

        if let Ok(url) = std::env::var("SENZ_API_URL") {
            self.set_api_url(url);
        }
        if let Ok(url) = std::env::var("SENZ_AUTHORIZE_URL") {
            self.authorize_url = url;
        }
        if let Ok(url) = std::env::var("SENZ_TOKEN_URL") {
            self.token_url = url;
        }
        if let Ok(raw) = std::env::var("SENZ_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                SenzError::Configuration(format!(
                    "SENZ_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"
                ))
            })?;
            self.set_request_timeout(Duration::from_secs(secs))?;
        }
        Ok(())
    }

    pub fn set_api_url(&mut self, url: impl Into<String>) {
        self.api_url = url.into().trim_end_matches('/').to_string();
    }

    pub fn set_request_timeout(&mut self, timeout: Duration) -> Result<(), SenzError> {
        if timeout.is_zero() {
            return Err(SenzError::Configuration(
                "request timeout must be greater than zero".to_string(),
            ));
        }
        self.request_timeout = timeout;
        Ok(())
    }
}
