//! Fluent setters for `ServerConfigBuilder`

use std::path::PathBuf;
use std::time::Duration;

use super::builder::ServerConfigBuilder;
use super::types::FetchConfig;

impl ServerConfigBuilder {
    /// Root for relative record paths (default: `data`)
    #[must_use]
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Output directory for reports (default: `reports`)
    #[must_use]
    pub fn reports_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.reports_dir = dir.into();
        self
    }

    /// File of extra stop words, one per line
    #[must_use]
    pub fn extra_stop_words_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.extra_stop_words_file = Some(path.into());
        self
    }

    /// Replace the whole fetch configuration
    #[must_use]
    pub fn fetch(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }

    /// Attempts per fetch, including the first (default: 3)
    #[must_use]
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.fetch.max_attempts = attempts;
        self
    }

    /// Per-request timeout (default: 10 seconds)
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.fetch.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn accept_language(mut self, value: impl Into<String>) -> Self {
        self.fetch.accept_language = value.into();
        self
    }

    /// Pool of user agents rotated across attempts
    #[must_use]
    pub fn user_agents<I, S>(mut self, agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fetch.user_agents = agents.into_iter().map(Into::into).collect();
        self
    }

    /// Text cap used when `fetch_webpage` is called without `max_chars`
    #[must_use]
    pub fn default_max_chars(mut self, chars: usize) -> Self {
        self.fetch.default_max_chars = chars;
        self
    }
}
