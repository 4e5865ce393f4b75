//! Senz CLI binary entry point.

use senz::cli::{commands, errors, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let default_level = if cli.verbose { "senz=debug" } else { "senz=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::run(cli).await {
        eprintln!("Error: {}", errors::format_error_help(&e));
        std::process::exit(1);
    }
}
