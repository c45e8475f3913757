//! Core configuration types for the resource validator server
//!
//! `ServerConfig` holds the directories the tools work in; `FetchConfig`
//! holds everything the web fetcher needs to make and retry requests.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::utils::{
    DEFAULT_ACCEPT_LANGUAGE, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_CHARS,
    DEFAULT_REQUEST_TIMEOUT_SECS, USER_AGENTS,
};

/// Request and retry settings for the web fetcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Attempts per fetch, including the first one
    pub max_attempts: u32,

    /// Per-request timeout
    pub request_timeout: Duration,

    /// A timed-out attempt `n` (0-based) waits `timeout_backoff_base * 2^n`
    pub timeout_backoff_base: Duration,

    /// Wait after an HTTP 429
    pub rate_limit_delay: Duration,

    /// Wait after any other HTTP error status
    pub http_error_delay: Duration,

    /// Wait after a connection-level failure
    pub network_error_delay: Duration,

    pub accept_language: String,

    /// Rotated by attempt number; must not be empty
    pub user_agents: Vec<String>,

    /// Text cap used when a caller does not pass one
    pub default_max_chars: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            timeout_backoff_base: Duration::from_secs(1),
            rate_limit_delay: Duration::from_secs(5),
            http_error_delay: Duration::from_secs(2),
            network_error_delay: Duration::from_secs(1),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            user_agents: USER_AGENTS.iter().map(|s| (*s).to_string()).collect(),
            default_max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl FetchConfig {
    /// User agent for a 0-based attempt number
    #[must_use]
    pub fn user_agent_for(&self, attempt: u32) -> &str {
        if self.user_agents.is_empty() {
            return USER_AGENTS[0];
        }
        &self.user_agents[attempt as usize % self.user_agents.len()]
    }
}

/// Main configuration for the MCP server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Root for every relative record path the tools accept
    pub(crate) data_dir: PathBuf,

    /// Where validation reports are written
    pub(crate) reports_dir: PathBuf,

    /// Optional newline-separated list of extra stop words
    pub(crate) extra_stop_words_file: Option<PathBuf>,

    pub(crate) fetch: FetchConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fetch_policy() {
        let config = FetchConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.rate_limit_delay, Duration::from_secs(5));
        assert_eq!(config.default_max_chars, 3000);
        assert_eq!(config.user_agents.len(), 3);
    }

    #[test]
    fn user_agents_rotate_by_attempt() {
        let config = FetchConfig::default();
        assert_eq!(config.user_agent_for(0), USER_AGENTS[0]);
        assert_eq!(config.user_agent_for(1), USER_AGENTS[1]);
        assert_eq!(config.user_agent_for(3), USER_AGENTS[0]);
    }

    #[test]
    fn empty_user_agent_pool_falls_back() {
        let config = FetchConfig {
            user_agents: Vec::new(),
            ..FetchConfig::default()
        };
        assert_eq!(config.user_agent_for(7), USER_AGENTS[0]);
    }
}
