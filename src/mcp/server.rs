//! MCP server over stdio exposing the resource tools

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    transport::stdio,
};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::registry::ToolRegistry;

/// Stdio MCP server dispatching to a [`ToolRegistry`]
#[derive(Clone)]
pub struct ResourceValidatorServer {
    registry: ToolRegistry,
}

impl ResourceValidatorServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Run a tool and shape its outcome as a tool result
    ///
    /// Tool failures become `is_error` results carrying the uniform error
    /// payload; only unknown tool names are protocol errors.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
        cancel: CancellationToken,
    ) -> Result<CallToolResult, McpError> {
        log::info!("Tool call: {name}");

        let outcome = self
            .registry
            .call(name, arguments, cancel)
            .await
            .ok_or_else(|| McpError::invalid_params(format!("Unknown tool: {name}"), None))?;

        Ok(match outcome {
            Ok(value) => {
                log::debug!("Tool {name} succeeded");
                CallToolResult::success(vec![Content::text(render(&value))])
            }
            Err(e) => {
                log::error!("Tool {name} failed: {e}");
                CallToolResult::error(vec![Content::text(render(&e.to_payload()))])
            }
        })
    }

    /// Serve the tools over stdin/stdout until the client disconnects
    pub async fn serve_stdio(self) -> Result<()> {
        log::info!("Starting stdio server with {} tools", self.registry.len());

        let service = self.serve(stdio()).await.inspect_err(|e| {
            log::error!("serving error: {e:?}");
        })?;
        service.waiting().await?;

        log::info!("Stdio server stopped");
        Ok(())
    }
}

fn render(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

impl ServerHandler for ResourceValidatorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Resource validator: read resource JSON files, fetch their web pages, \
                 score descriptions against page text, update records and save reports."
                    .to_string(),
            ),
        }
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(&request.name, request.arguments, context.ct)
            .await
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self.registry.list();
        log::debug!("Serving {} tools", tools.len());
        Ok(ListToolsResult::with_all_items(tools))
    }
}
