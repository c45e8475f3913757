//! Getter methods for `ServerConfig`

use std::path::Path;

use super::types::{FetchConfig, ServerConfig};

impl ServerConfig {
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    #[must_use]
    pub fn extra_stop_words_file(&self) -> Option<&Path> {
        self.extra_stop_words_file.as_deref()
    }

    #[must_use]
    pub fn fetch(&self) -> &FetchConfig {
        &self.fetch
    }
}
