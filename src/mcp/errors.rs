//! Error type shared by every resource tool

use serde_json::{Value, json};
use thiserror::Error;

use crate::fetcher::FetchError;
use crate::report::ReportError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("{0}")]
    NotFound(String),
}

impl ToolError {
    /// The `{"status": "error", "message": ...}` payload returned to clients
    #[must_use]
    pub fn to_payload(&self) -> Value {
        json!({
            "status": "error",
            "message": self.to_string(),
        })
    }
}
