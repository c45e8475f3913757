//! `validate_resource` MCP tool

use serde_json::Value;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use super::errors::ToolError;
use super::tool::{ResourceTool, success};
use super::types::ValidateResourceArgs;
use crate::validator::ResourceValidator;

#[derive(Debug, Clone)]
pub struct ValidateResourceTool {
    validator: Arc<ResourceValidator>,
}

impl ValidateResourceTool {
    pub fn new(validator: Arc<ResourceValidator>) -> Self {
        Self { validator }
    }
}

impl ResourceTool for ValidateResourceTool {
    type Args = ValidateResourceArgs;

    fn name() -> &'static str {
        "validate_resource"
    }

    fn description() -> &'static str {
        "Score a resource description against its web page text. Returns \
         validation_status (OK, NEEDS_UPDATE or MISMATCH), confidence, the \
         keyword/similarity/length sub-scores, a suggested replacement \
         description and the reasoning."
    }

    async fn execute(&self, args: Self::Args, _cancel: CancellationToken) -> Result<Value, ToolError> {
        log::info!("Validating resource: {}", args.resource_id);
        let result = self.validator.validate(
            &args.resource_id,
            &args.current_description,
            &args.webpage_content,
        );
        Ok(success(serde_json::to_value(&result)?))
    }
}
