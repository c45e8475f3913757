//! Error types for record store operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The record file does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file (or supplied payload) is not valid JSON
    #[error("Malformed JSON in {source_name}: {source}")]
    MalformedJson {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The path escapes the data directory or is otherwise unusable
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// A record referenced by id or index does not exist
    #[error("Resource {0} not found")]
    ResourceNotFound(String),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(source_name: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::MalformedJson {
            source_name: source_name.into(),
            source,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_) | StoreError::ResourceNotFound(_))
    }
}
