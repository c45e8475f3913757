//! `fetch_webpage` MCP tool: visible text of a single page

use serde_json::{Value, json};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use super::errors::ToolError;
use super::tool::{ResourceTool, success};
use super::types::FetchWebpageArgs;
use crate::fetcher::WebFetcher;

#[derive(Debug, Clone)]
pub struct FetchWebpageTool {
    fetcher: Arc<WebFetcher>,
}

impl FetchWebpageTool {
    pub fn new(fetcher: Arc<WebFetcher>) -> Self {
        Self { fetcher }
    }
}

impl ResourceTool for FetchWebpageTool {
    type Args = FetchWebpageArgs;

    fn name() -> &'static str {
        "fetch_webpage"
    }

    fn description() -> &'static str {
        "Fetch a web page and return its visible text (scripts, styles, \
         navigation and footer removed), truncated to `max_chars` \
         (default 3000). Failed requests are retried with backoff. \
         Example: fetch_webpage({\"url\": \"https://dod.hse.ru\", \"max_chars\": 5000})"
    }

    fn open_world() -> bool {
        true
    }

    async fn execute(&self, args: Self::Args, cancel: CancellationToken) -> Result<Value, ToolError> {
        let max_chars = args
            .max_chars
            .unwrap_or(self.fetcher.config().default_max_chars);
        log::info!("Loading page: {}", args.url);

        let content = self
            .fetcher
            .fetch_text_cancellable(&args.url, max_chars, &cancel)
            .await?;
        let length = content.chars().count();

        Ok(success(json!({
            "url": args.url,
            "content": content,
            "length": length,
        })))
    }
}
