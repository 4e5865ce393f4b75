//! CLI-specific error formatting for user-facing messages.

use crate::error::{RecoverySuggestion, SenzError};

/// Map a [`SenzError`] to a user-facing help string with actionable guidance.
pub fn format_error_help(err: &SenzError) -> String {
    match err.recovery_suggestion() {
        RecoverySuggestion::Reauthenticate => {
            format!("{err}. Get a fresh access token and pass it with --token or SENZ_ACCESS_TOKEN")
        }
        RecoverySuggestion::RetryLater => {
            format!("{err}. The SENZ service did not answer in time; try again later")
        }
        RecoverySuggestion::CheckConfiguration => {
            format!("{err}. Check ~/.senz/config.toml and SENZ_* environment variables")
        }
        RecoverySuggestion::ContactSupport => format!("{err}"),
    }
}
