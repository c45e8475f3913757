//! Configuration for the resource validator server
//!
//! `ServerConfig` and its builder, plus the `FetchConfig` retry policy used by
//! the web fetcher.

pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

pub use builder::{DEFAULT_DATA_DIR, DEFAULT_REPORTS_DIR, ServerConfigBuilder};
pub use types::{FetchConfig, ServerConfig};
