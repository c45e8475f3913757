//! Builder for `ServerConfig`
//!
//! Every field has a default, so `ServerConfig::builder().build()` is a
//! valid configuration. `build` rejects settings the fetcher cannot work with.

use anyhow::{Result, anyhow};
use std::path::PathBuf;
use std::time::Duration;

use super::types::{FetchConfig, ServerConfig};
use crate::validator::StopWords;

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default report directory, relative to the working directory
pub const DEFAULT_REPORTS_DIR: &str = "reports";

pub struct ServerConfigBuilder {
    pub(crate) data_dir: PathBuf,
    pub(crate) reports_dir: PathBuf,
    pub(crate) extra_stop_words_file: Option<PathBuf>,
    pub(crate) fetch: FetchConfig,
}

impl Default for ServerConfigBuilder {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            reports_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
            extra_stop_words_file: None,
            fetch: FetchConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create a builder for configuring a `ServerConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Stop words for the validator: the built-in list plus the optional file
    ///
    /// # Errors
    ///
    /// Returns an error if the extra stop words file cannot be read.
    pub fn load_stop_words(&self) -> Result<StopWords> {
        match &self.extra_stop_words_file {
            Some(path) => StopWords::default().extended_from_file(path),
            None => Ok(StopWords::default()),
        }
    }
}

impl ServerConfigBuilder {
    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is zero, the request timeout is
    /// zero, the user agent pool is empty, or the text cap is zero.
    pub fn build(self) -> Result<ServerConfig> {
        if self.fetch.max_attempts == 0 {
            return Err(anyhow!("max_attempts must be at least 1"));
        }
        if self.fetch.request_timeout == Duration::ZERO {
            return Err(anyhow!("request_timeout must be greater than zero"));
        }
        if self.fetch.user_agents.is_empty() {
            return Err(anyhow!("at least one user agent is required"));
        }
        if self.fetch.default_max_chars == 0 {
            return Err(anyhow!("default_max_chars must be greater than zero"));
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(anyhow!("data_dir must not be empty"));
        }

        Ok(ServerConfig {
            data_dir: self.data_dir,
            reports_dir: self.reports_dir,
            extra_stop_words_file: self.extra_stop_words_file,
            fetch: self.fetch,
        })
    }
}
