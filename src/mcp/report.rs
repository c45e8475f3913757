//! `save_validation_report` MCP tool

use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use super::errors::ToolError;
use super::tool::{ResourceTool, success};
use super::types::SaveValidationReportArgs;
use crate::report::ReportGenerator;

#[derive(Debug, Clone)]
pub struct SaveValidationReportTool {
    reports: ReportGenerator,
}

impl SaveValidationReportTool {
    pub fn new(reports: ReportGenerator) -> Self {
        Self { reports }
    }
}

impl ResourceTool for SaveValidationReportTool {
    type Args = SaveValidationReportArgs;

    fn name() -> &'static str {
        "save_validation_report"
    }

    fn description() -> &'static str {
        "Save validation results as a report in the reports directory. \
         `report_data` is JSON text with a list of validation results (a single \
         object is treated as a list of one). `format` is csv (default), json or html."
    }

    fn read_only() -> bool {
        false
    }

    async fn execute(&self, args: Self::Args, _cancel: CancellationToken) -> Result<Value, ToolError> {
        log::info!("Saving {} validation report", args.format);

        let records = match serde_json::from_str::<Value>(&args.report_data)? {
            Value::Array(items) => items,
            other => vec![other],
        };

        let path = self
            .reports
            .generate(args.format, &records, args.filename.as_deref())
            .await?;
        let filepath = path.display().to_string();

        log::info!("Report saved: {filepath}");
        Ok(success(json!({
            "filepath": filepath,
            "record_count": records.len(),
            "message": format!("Report saved: {filepath}"),
        })))
    }
}
