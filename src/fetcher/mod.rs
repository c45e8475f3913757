//! Web page fetching
//!
//! `WebFetcher` downloads a page over HTTP(S), strips non-content markup and
//! returns visible text capped at a character budget.
//!
//! Each attempt rotates the user agent from the configured pool. Failed
//! attempts are retried with a delay that depends on the failure:
//!
//! | Failure          | Delay before next attempt          |
//! |------------------|------------------------------------|
//! | timeout          | `timeout_backoff_base * 2^attempt` |
//! | HTTP 429         | `rate_limit_delay`                 |
//! | other HTTP error | `http_error_delay`                 |
//! | network error    | `network_error_delay`              |
//!
//! When the budget is spent, timeouts surface as [`FetchError::Timeout`],
//! persistent rate limiting as [`FetchError::Exhausted`], and anything else as
//! the error of the final attempt.

pub mod errors;
pub mod extract;
pub mod retry;

pub use errors::{AttemptError, FetchError, FetchResult};
pub use extract::extract_visible_text;
pub use retry::{DelayFn, backoff_for, retry_with_backoff, tokio_delay};

use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::config::FetchConfig;
use crate::utils::{HTML_ACCEPT, safe_truncate_chars};

/// Retrying page fetcher
#[derive(Clone)]
pub struct WebFetcher {
    client: Client,
    config: FetchConfig,
    delay: DelayFn,
}

impl std::fmt::Debug for WebFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebFetcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl WebFetcher {
    /// Fetcher that waits between attempts with the tokio timer
    pub fn new(config: FetchConfig) -> FetchResult<Self> {
        Self::with_delay(config, tokio_delay())
    }

    /// Fetcher with a custom delay function
    pub fn with_delay(config: FetchConfig, delay: DelayFn) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .no_proxy()
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            config,
            delay,
        })
    }

    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch `url` and return at most `max_chars` characters of visible text
    pub async fn fetch_text(&self, url: &str, max_chars: usize) -> FetchResult<String> {
        self.fetch_text_cancellable(url, max_chars, &CancellationToken::new())
            .await
    }

    /// Like [`fetch_text`](Self::fetch_text), abandoning the fetch when `cancel` fires
    pub async fn fetch_text_cancellable(
        &self,
        url: &str,
        max_chars: usize,
        cancel: &CancellationToken,
    ) -> FetchResult<String> {
        let parsed = validate_url(url)?;

        let text = retry_with_backoff(url, &self.config, &self.delay, cancel, |attempt| {
            self.attempt(parsed.clone(), attempt)
        })
        .await?;

        let result = safe_truncate_chars(&text, max_chars).to_string();
        log::info!("Loaded {url} ({} chars)", result.chars().count());
        Ok(result)
    }

    async fn attempt(&self, url: Url, attempt: u32) -> Result<String, AttemptError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.config.user_agent_for(attempt))
            .header(ACCEPT, HTML_ACCEPT)
            .header(ACCEPT_LANGUAGE, self.config.accept_language.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("HTTP error {} for {}", status.as_u16(), response.url());
            return Err(AttemptError::Status(status.as_u16()));
        }

        let html = response.text().await?;
        Ok(extract_visible_text(&html))
    }
}

/// Parse `url` and require an http(s) scheme
pub fn validate_url(url: &str) -> FetchResult<Url> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
