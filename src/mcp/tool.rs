//! The trait every resource tool implements, and its type-erased form
//!
//! Tools declare typed arguments; the registry stores them as
//! `Arc<dyn ErasedTool>` and feeds them raw JSON objects from the wire.

use futures::future::BoxFuture;
use rmcp::model::{JsonObject, Tool, ToolAnnotations};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use super::errors::ToolError;

/// A single MCP tool with typed arguments
pub trait ResourceTool: Send + Sync + 'static {
    type Args: DeserializeOwned + JsonSchema + Send;

    fn name() -> &'static str;

    fn description() -> &'static str;

    fn read_only() -> bool {
        true
    }

    fn destructive() -> bool {
        false
    }

    fn open_world() -> bool {
        false
    }

    /// Run the tool; the returned value is sent to the client as-is
    fn execute(
        &self,
        args: Self::Args,
        cancel: CancellationToken,
    ) -> impl Future<Output = Result<Value, ToolError>> + Send;
}

/// Object-safe view of a [`ResourceTool`]
pub trait ErasedTool: Send + Sync {
    fn tool_name(&self) -> &'static str;

    /// Tool description, schema and annotations as published by `list_tools`
    fn metadata(&self) -> Tool;

    fn call(&self, args: JsonObject, cancel: CancellationToken) -> BoxFuture<'_, Result<Value, ToolError>>;
}

/// JSON schema of an argument type as an MCP input schema object
pub fn build_schema<T: JsonSchema>() -> Arc<JsonObject> {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(map)) => Arc::new(map),
        _ => Arc::new(Map::new()),
    }
}

impl<T: ResourceTool> ErasedTool for T {
    fn tool_name(&self) -> &'static str {
        <T as ResourceTool>::name()
    }

    fn metadata(&self) -> Tool {
        let mut tool = Tool::new(<T as ResourceTool>::name(), T::description(), build_schema::<T::Args>());
        tool.annotations = Some(
            ToolAnnotations::new()
                .read_only(T::read_only())
                .destructive(T::destructive())
                .open_world(T::open_world()),
        );
        tool
    }

    fn call(&self, args: JsonObject, cancel: CancellationToken) -> BoxFuture<'_, Result<Value, ToolError>> {
        Box::pin(async move {
            let args: T::Args = serde_json::from_value(Value::Object(args))
                .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
            self.execute(args, cancel).await
        })
    }
}

/// Mark a response object as successful
///
/// Non-object values are wrapped under `result`.
#[must_use]
pub fn success(body: Value) -> Value {
    let mut object = match body {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("result".to_string(), other);
            map
        }
    };
    object.insert("status".to_string(), Value::String("success".to_string()));
    Value::Object(object)
}
