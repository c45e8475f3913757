//! MCP (Model Context Protocol) tools for validating resource descriptions
//!
//! ## Tools
//!
//! | Tool                       | Purpose                                            |
//! |----------------------------|----------------------------------------------------|
//! | `read_json_file`           | all records of a data file                         |
//! | `update_json_file`         | overwrite a data file, keeping a `.json.backup`    |
//! | `fetch_webpage`            | visible text of a page, with retries               |
//! | `validate_resource`        | score a description against page text              |
//! | `batch_get_resources`      | a window of record summaries                       |
//! | `list_resources`           | index, id and name of every record                 |
//! | `get_resource_by_id`       | one full record                                    |
//! | `save_validation_report`   | CSV, JSON or HTML report of validation results     |
//! | `list_data_files`          | data files matching a glob, with record counts     |
//! | `check_resource_structure` | records missing required fields                    |
//! | `merge_resource_files`     | append unseen records from one file to another     |
//!
//! ## Typical workflow
//!
//! 1. `batch_get_resources` to page through a file
//! 2. `fetch_webpage` on each resource's `website`
//! 3. `validate_resource` with the stored description and the page text
//! 4. `update_json_file` with corrected descriptions
//! 5. `save_validation_report` with the collected results
//!
//! ## Error Handling
//!
//! Successful calls return an object with `"status": "success"`. Every tool
//! failure is returned as a tool result flagged `is_error` whose text is
//! `{"status": "error", "message": "..."}`; unknown tool names are rejected as
//! invalid parameters.

pub mod errors;
pub mod fetch;
pub mod records;
pub mod registry;
pub mod report;
pub mod server;
pub mod tool;
pub mod types;
pub mod validate;

pub use errors::ToolError;
pub use registry::ToolRegistry;
pub use server::ResourceValidatorServer;
pub use tool::{ErasedTool, ResourceTool, build_schema, success};
pub use types::*;

pub use fetch::FetchWebpageTool;
pub use records::{
    BatchGetResourcesTool, CheckResourceStructureTool, GetResourceByIdTool, ListDataFilesTool,
    ListResourcesTool, MergeResourceFilesTool, ReadJsonFileTool, UpdateJsonFileTool,
};
pub use report::SaveValidationReportTool;
pub use validate::ValidateResourceTool;
