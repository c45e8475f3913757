//! Registry of the resource tools, keyed by tool name

use rmcp::model::{JsonObject, Tool};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use super::errors::ToolError;
use super::fetch::FetchWebpageTool;
use super::records::{
    BatchGetResourcesTool, CheckResourceStructureTool, GetResourceByIdTool, ListDataFilesTool,
    ListResourcesTool, MergeResourceFilesTool, ReadJsonFileTool, UpdateJsonFileTool,
};
use super::report::SaveValidationReportTool;
use super::tool::ErasedTool;
use super::validate::ValidateResourceTool;
use crate::fetcher::WebFetcher;
use crate::report::ReportGenerator;
use crate::store::RecordStore;
use crate::validator::ResourceValidator;

/// Tools in registration order, plus a name index for dispatch
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn ErasedTool>>,
    by_name: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every resource tool
    #[must_use]
    pub fn with_all_tools(
        store: RecordStore,
        fetcher: Arc<WebFetcher>,
        validator: Arc<ResourceValidator>,
        reports: ReportGenerator,
    ) -> Self {
        let mut registry = Self::new();
        registry.register(ReadJsonFileTool::new(store.clone()));
        registry.register(FetchWebpageTool::new(fetcher));
        registry.register(ValidateResourceTool::new(validator));
        registry.register(BatchGetResourcesTool::new(store.clone()));
        registry.register(UpdateJsonFileTool::new(store.clone()));
        registry.register(SaveValidationReportTool::new(reports));
        registry.register(ListResourcesTool::new(store.clone()));
        registry.register(GetResourceByIdTool::new(store.clone()));
        registry.register(ListDataFilesTool::new(store.clone()));
        registry.register(CheckResourceStructureTool::new(store.clone()));
        registry.register(MergeResourceFilesTool::new(store));
        registry
    }

    /// Add a tool; a later tool with the same name replaces the earlier one
    pub fn register<T: ErasedTool + 'static>(&mut self, tool: T) {
        let name = tool.tool_name();
        let tool: Arc<dyn ErasedTool> = Arc::new(tool);
        match self.by_name.get(name) {
            Some(&index) => self.tools[index] = tool,
            None => {
                self.by_name.insert(name, self.tools.len());
                self.tools.push(tool);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.tool_name()).collect()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Metadata of every tool, in registration order
    #[must_use]
    pub fn list(&self) -> Vec<Tool> {
        self.tools.iter().map(|t| t.metadata()).collect()
    }

    /// Run a tool by name; `None` when no such tool is registered
    pub async fn call(
        &self,
        name: &str,
        args: Option<JsonObject>,
        cancel: CancellationToken,
    ) -> Option<Result<Value, ToolError>> {
        let index = *self.by_name.get(name)?;
        let tool = self.tools[index].clone();
        Some(tool.call(args.unwrap_or_default(), cancel).await)
    }
}
