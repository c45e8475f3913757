pub mod config;
pub mod fetcher;
pub mod mcp;
pub mod report;
pub mod store;
pub mod utils;
pub mod validator;

use anyhow::Context;
use std::sync::Arc;

pub use config::{FetchConfig, ServerConfig, ServerConfigBuilder};
pub use fetcher::{FetchError, WebFetcher};
pub use report::{ReportFormat, ReportGenerator, ReportSummary};
pub use store::{RecordStore, StoreError};
pub use validator::{ResourceValidator, StopWords, ValidationResult, ValidationStatus};

// MCP server and tools
pub use mcp::{ResourceValidatorServer, ToolError, ToolRegistry};

/// Open every component named by `config` and register all tools
///
/// Creates the data and reports directories when missing.
pub async fn build_registry(config: &ServerConfig) -> anyhow::Result<ToolRegistry> {
    let store = RecordStore::open(config.data_dir())
        .await
        .with_context(|| format!("Failed to open data directory {}", config.data_dir().display()))?;
    let reports = ReportGenerator::open(config.reports_dir())
        .await
        .with_context(|| format!("Failed to open reports directory {}", config.reports_dir().display()))?;
    let fetcher = WebFetcher::new(config.fetch().clone()).context("Failed to create web fetcher")?;
    let validator = ResourceValidator::with_stop_words(config.load_stop_words()?);

    log::info!("Data directory: {}", store.data_dir().display());
    log::info!("Reports directory: {}", reports.reports_dir().display());
    log::debug!("Validator uses {} stop words", validator.stop_words().len());

    Ok(ToolRegistry::with_all_tools(
        store,
        Arc::new(fetcher),
        Arc::new(validator),
        reports,
    ))
}

/// Build the registry and serve it over stdio until the client disconnects
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let registry = build_registry(&config).await?;
    ResourceValidatorServer::new(registry).serve_stdio().await
}
