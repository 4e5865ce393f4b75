//! Timeout helper.

use std::future::Future;
use std::time::Duration;

use crate::error::SenzError;

/// Wrap a future with a timeout. Expiry drops the future.
pub async fn with_timeout<T>(
    duration: Duration,
    future: impl Future<Output = Result<T, SenzError>>,
) -> Result<T, SenzError> {
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout_ms = duration.as_millis() as u64, "SENZ call timed out");
            Err(SenzError::Timeout(duration.as_millis() as u64))
        }
    }
}
