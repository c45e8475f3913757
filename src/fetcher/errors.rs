//! Error types for page fetching

use thiserror::Error;

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Every attempt timed out
    #[error("Timeout after {attempts} attempts loading {url}")]
    Timeout { url: String, attempts: u32 },

    /// The server kept rate limiting until the attempt budget ran out
    #[error("Failed to load {url} after {attempts} attempts: {last_error}")]
    Exhausted {
        url: String,
        attempts: u32,
        last_error: String,
    },

    /// Final attempt ended with an HTTP error status
    #[error("HTTP error {status} loading {url}")]
    Status { url: String, status: u16 },

    /// Final attempt failed below HTTP (DNS, connection reset, bad body)
    #[error("Error loading {url}: {message}")]
    Network { url: String, message: String },

    #[error("Loading {url} was cancelled")]
    Cancelled { url: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    /// True for the errors that mean "gave up after retrying"
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. } | FetchError::Exhausted { .. })
    }
}

/// Failure of a single attempt, before retry policy is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    Timeout,
    Status(u16),
    Network(String),
}

impl std::fmt::Display for AttemptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptError::Timeout => f.write_str("request timed out"),
            AttemptError::Status(status) => write!(f, "HTTP {status}"),
            AttemptError::Network(message) => f.write_str(message),
        }
    }
}

impl From<reqwest::Error> for AttemptError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            AttemptError::Timeout
        } else if let Some(status) = error.status() {
            AttemptError::Status(status.as_u16())
        } else {
            AttemptError::Network(error.to_string())
        }
    }
}
