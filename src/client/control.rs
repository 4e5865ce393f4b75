//! Device control calls: target temperature and thermostat modes.

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::debug;

use crate::error::SenzError;
use crate::util::timeout::with_timeout;

use super::http::json_patch_headers;
use super::transport::SenzAuth;

/// Bound applied to every device control call, token fetch included.
pub const DEVICE_CONTROL_TIMEOUT: Duration = Duration::from_secs(10);

/// Temperature sent for "off". The API has no off mode, so off is manual
/// mode pinned to 5 °C.
pub const OFF_TEMPERATURE: i32 = 500;

/// Thermostat mode as named in the `/Mode/<mode>` endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThermostatMode {
    Auto,
    Manual,
    Hold,
}

impl ThermostatMode {
    /// API path for switching to this mode.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Auto => "/Mode/auto",
            Self::Manual => "/Mode/manual",
            Self::Hold => "/Mode/hold",
        }
    }
}

/// Payload of a mode update. Built per call and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeCommand {
    pub serial_number: String,
    /// Vendor fixed-point value, sent unscaled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_until: Option<String>,
}

impl ModeCommand {
    pub fn new(serial: impl Into<String>) -> Self {
        Self {
            serial_number: serial.into(),
            temperature: None,
            hold_until: None,
        }
    }

    pub fn with_temperature(mut self, temperature: i32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_hold_until(mut self, hold_until: impl Into<String>) -> Self {
        self.hold_until = Some(hold_until.into());
        self
    }
}

impl SenzAuth {
    /// Set the target temperature (switches the thermostat to manual).
    ///
    /// `temperature` is the vendor's fixed-point integer and is forwarded
    /// unscaled; [`OFF_TEMPERATURE`] (500) stands for 5 °C.
    pub async fn set_target_temperature(
        &self,
        serial: &str,
        temperature: i32,
    ) -> Result<reqwest::Response, SenzError> {
        let command = ModeCommand::new(serial).with_temperature(temperature);
        self.put_mode(ThermostatMode::Manual, &command).await
    }

    /// Follow the thermostat's schedule.
    pub async fn set_mode_auto(&self, serial: &str) -> Result<reqwest::Response, SenzError> {
        self.put_mode(ThermostatMode::Auto, &ModeCommand::new(serial))
            .await
    }

    /// Hold the current target temperature indefinitely.
    pub async fn set_mode_manual(&self, serial: &str) -> Result<reqwest::Response, SenzError> {
        self.put_mode(ThermostatMode::Manual, &ModeCommand::new(serial))
            .await
    }

    /// Override the schedule with `temperature` until `hold_until`.
    ///
    /// `hold_until` is forwarded verbatim; the API expects an ISO 8601
    /// timestamp such as `2024-01-01T10:00:00Z`.
    pub async fn set_mode_hold(
        &self,
        serial: &str,
        temperature: i32,
        hold_until: &str,
    ) -> Result<reqwest::Response, SenzError> {
        let command = ModeCommand::new(serial)
            .with_temperature(temperature)
            .with_hold_until(hold_until);
        self.put_mode(ThermostatMode::Hold, &command).await
    }

    /// [`set_mode_hold`](Self::set_mode_hold) with a typed end time.
    pub async fn set_mode_hold_until(
        &self,
        serial: &str,
        temperature: i32,
        until: DateTime<Utc>,
    ) -> Result<reqwest::Response, SenzError> {
        let hold_until = until.to_rfc3339_opts(SecondsFormat::Secs, true);
        self.set_mode_hold(serial, temperature, &hold_until).await
    }

    /// Simulated off: manual mode at [`OFF_TEMPERATURE`].
    pub async fn set_mode_off(&self, serial: &str) -> Result<reqwest::Response, SenzError> {
        let command = ModeCommand::new(serial).with_temperature(OFF_TEMPERATURE);
        self.put_mode(ThermostatMode::Manual, &command).await
    }

    async fn put_mode(
        &self,
        mode: ThermostatMode,
        command: &ModeCommand,
    ) -> Result<reqwest::Response, SenzError> {
        let body = serde_json::to_string(command)?;
        debug!(mode = %mode, serial = %command.serial_number, "Setting thermostat mode");
        with_timeout(
            self.timeout(),
            self.request(Method::PUT, mode.path(), Some(body), Some(json_patch_headers())),
        )
        .await
    }
}
