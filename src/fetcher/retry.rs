//! Bounded retry loop for page fetches
//!
//! The loop owns the retry policy; the attempt itself and the delay between
//! attempts are injected, so the policy can be exercised without a network
//! and without sleeping.

use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::errors::{AttemptError, FetchError, FetchResult};
use crate::config::FetchConfig;

/// Delay function awaited between attempts
pub type DelayFn = Arc<dyn Fn(Duration) -> BoxFuture<'static, ()> + Send + Sync>;

/// Delay backed by the tokio timer
#[must_use]
pub fn tokio_delay() -> DelayFn {
    Arc::new(|duration| Box::pin(tokio::time::sleep(duration)))
}

/// Wait before the attempt after `attempt` (0-based) failed with `error`
#[must_use]
pub fn backoff_for(config: &FetchConfig, error: &AttemptError, attempt: u32) -> Duration {
    match error {
        AttemptError::Timeout => config.timeout_backoff_base * 2u32.saturating_pow(attempt.min(10)),
        AttemptError::Status(429) => config.rate_limit_delay,
        AttemptError::Status(_) => config.http_error_delay,
        AttemptError::Network(_) => config.network_error_delay,
    }
}

/// Map the error of the final attempt to the error surfaced to callers
fn final_error(url: &str, attempts: u32, error: AttemptError) -> FetchError {
    let url = url.to_string();
    match error {
        AttemptError::Timeout => FetchError::Timeout { url, attempts },
        AttemptError::Status(429) => FetchError::Exhausted {
            url,
            attempts,
            last_error: error.to_string(),
        },
        AttemptError::Status(status) => FetchError::Status { url, status },
        AttemptError::Network(message) => FetchError::Network { url, message },
    }
}

/// Run `attempt` up to `config.max_attempts` times
///
/// `attempt` receives the 0-based attempt number. Both the attempt and the
/// wait after it race against `cancel`; on cancellation the in-flight attempt
/// future is dropped.
pub async fn retry_with_backoff<F, Fut, T>(
    url: &str,
    config: &FetchConfig,
    delay: &DelayFn,
    cancel: &CancellationToken,
    mut attempt: F,
) -> FetchResult<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, AttemptError>>,
{
    let max_attempts = config.max_attempts.max(1);

    for n in 0..max_attempts {
        log::debug!("Attempt {}/{max_attempts}: {url}", n + 1);

        let result = tokio::select! {
            res = attempt(n) => res,
            () = cancel.cancelled() => {
                log::info!("Fetch of {url} cancelled during attempt {}", n + 1);
                return Err(FetchError::Cancelled { url: url.to_string() });
            }
        };

        let error = match result {
            Ok(value) => {
                if n > 0 {
                    log::info!("Loaded {url} on attempt {}/{max_attempts}", n + 1);
                }
                return Ok(value);
            }
            Err(error) => error,
        };

        if n + 1 == max_attempts {
            log::warn!("Giving up on {url} after {max_attempts} attempts: {error}");
            return Err(final_error(url, max_attempts, error));
        }

        let wait = backoff_for(config, &error, n);
        log::warn!(
            "Attempt {}/{max_attempts} for {url} failed: {error}. Retrying in {wait:?}",
            n + 1
        );

        tokio::select! {
            () = delay(wait) => {}
            () = cancel.cancelled() => {
                log::info!("Fetch of {url} cancelled during backoff");
                return Err(FetchError::Cancelled { url: url.to_string() });
            }
        }
    }

    Err(FetchError::Exhausted {
        url: url.to_string(),
        attempts: max_attempts,
        last_error: "no attempts made".to_string(),
    })
}
