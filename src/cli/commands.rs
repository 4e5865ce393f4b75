//! CLI command handlers.

use std::sync::Arc;

use chrono::DateTime;

use crate::client::{shared_client, PreAuthClient, SenzAuth};
use crate::config::{SenzConfig, TokenSource};
use crate::error::SenzError;

use super::{Cli, Commands, ModeCommands};

/// Run a parsed command line.
pub async fn run(cli: Cli) -> Result<(), SenzError> {
    let mut config = SenzConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.set_api_url(url);
    }
    let tokens = TokenSource::from_arg(cli.token);

    match cli.command {
        Commands::Account => handle_account(&config, &tokens).await,
        Commands::Temperature(args) => {
            let auth = authenticated(&config, tokens)?;
            let response = auth
                .set_target_temperature(&args.serial, args.temperature)
                .await?;
            report(&args.serial, "temperature set", &response);
            Ok(())
        }
        Commands::Mode(mode) => {
            let auth = authenticated(&config, tokens)?;
            let (serial, response) = match mode.command {
                ModeCommands::Auto(args) => {
                    let response = auth.set_mode_auto(&args.serial).await?;
                    (args.serial, response)
                }
                ModeCommands::Manual(args) => {
                    let response = auth.set_mode_manual(&args.serial).await?;
                    (args.serial, response)
                }
                ModeCommands::Hold(args) => {
                    validate_hold_until(&args.until)?;
                    let response = auth
                        .set_mode_hold(&args.serial, args.temperature, &args.until)
                        .await?;
                    (args.serial, response)
                }
                ModeCommands::Off(args) => {
                    let response = auth.set_mode_off(&args.serial).await?;
                    (args.serial, response)
                }
            };
            report(&serial, "mode updated", &response);
            Ok(())
        }
    }
}

async fn handle_account(config: &SenzConfig, tokens: &TokenSource) -> Result<(), SenzError> {
    let token = tokens.resolve()?;
    let client = PreAuthClient::with_base_url(shared_client().clone(), config.api_url.clone());
    let account = client.get_account(&token).await?;
    println!("{}", serde_json::to_string_pretty(&account)?);
    Ok(())
}

fn authenticated(config: &SenzConfig, tokens: TokenSource) -> Result<SenzAuth, SenzError> {
    let provider = Arc::new(tokens.into_provider()?);
    Ok(SenzAuth::from_config(
        shared_client().clone(),
        config,
        provider,
    ))
}

fn report(serial: &str, what: &str, response: &reqwest::Response) {
    println!("{serial}: {what} (HTTP {})", response.status().as_u16());
}

/// Reject hold end times the API would not understand.
pub fn validate_hold_until(until: &str) -> Result<(), SenzError> {
    DateTime::parse_from_rfc3339(until).map(|_| ()).map_err(|e| {
        SenzError::InvalidArgument(format!("hold end time {until:?} is not RFC 3339: {e}"))
    })
}
