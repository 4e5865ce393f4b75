//! CLI entry point for Senz.

pub mod commands;
pub mod errors;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SENZ WiFi thermostat CLI
#[derive(Parser, Debug)]
#[command(name = "senz", version, about = "SENZ WiFi thermostat CLI")]
pub struct Cli {
    /// Access token (defaults to $SENZ_ACCESS_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API base URL override
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (defaults to ~/.senz/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the account behind the access token
    Account,
    /// Set the target temperature (switches to manual)
    Temperature(TemperatureArgs),
    /// Change the thermostat mode
    Mode(ModeArgs),
}

/// Arguments for `senz temperature`.
#[derive(Parser, Debug)]
pub struct TemperatureArgs {
    /// Thermostat serial number
    pub serial: String,
    /// Target temperature in the API's fixed-point units (e.g. 2150)
    pub temperature: i32,
}

/// Arguments for the `mode` subcommand group.
#[derive(Parser, Debug)]
pub struct ModeArgs {
    #[command(subcommand)]
    pub command: ModeCommands,
}

/// Mode subcommands.
#[derive(Subcommand, Debug)]
pub enum ModeCommands {
    /// Follow the schedule
    Auto(SerialArgs),
    /// Hold the current target temperature
    Manual(SerialArgs),
    /// Override the schedule until a point in time
    Hold(HoldArgs),
    /// Turn heating off (manual at 5 °C)
    Off(SerialArgs),
}

/// A bare serial number argument.
#[derive(Parser, Debug)]
pub struct SerialArgs {
    /// Thermostat serial number
    pub serial: String,
}

/// Arguments for `senz mode hold`.
#[derive(Parser, Debug)]
pub struct HoldArgs {
    /// Thermostat serial number
    pub serial: String,
    /// Target temperature in the API's fixed-point units
    pub temperature: i32,
    /// End of the hold, RFC 3339 (e.g. 2024-01-01T10:00:00Z)
    pub until: String,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
