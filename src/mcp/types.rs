//! Argument types for the resource tools
//!
//! Field doc comments become the parameter descriptions in the published
//! JSON schemas.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::report::ReportFormat;

fn default_count() -> usize {
    10
}

fn default_pattern() -> String {
    "*.json".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadJsonFileArgs {
    /// Path to the JSON file, relative to the data directory (e.g. `hse/infoEvents.json`)
    pub filepath: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateJsonFileArgs {
    /// Path to the JSON file, relative to the data directory
    pub filepath: String,
    /// JSON text with the updated resources; a single object is stored as a one-element list
    pub updated_data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FetchWebpageArgs {
    /// Page URL (http or https)
    pub url: String,
    /// Maximum characters of page text to return (default: 3000)
    #[serde(default)]
    pub max_chars: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ValidateResourceArgs {
    /// Resource id, echoed back in the result
    pub resource_id: String,
    /// Description currently stored for the resource
    pub current_description: String,
    /// Text of the resource's web page, usually from `fetch_webpage`
    pub webpage_content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BatchGetResourcesArgs {
    /// Path to the JSON file, relative to the data directory
    pub filepath: String,
    /// Index of the first resource (default: 0)
    #[serde(default)]
    pub start_index: usize,
    /// Number of resources to return (default: 10)
    #[serde(default = "default_count")]
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListResourcesArgs {
    /// Path to the JSON file, relative to the data directory
    pub filepath: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetResourceByIdArgs {
    /// Path to the JSON file, relative to the data directory
    pub filepath: String,
    /// Id of the resource to return
    pub resource_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SaveValidationReportArgs {
    /// JSON text with validation results (a list, or a single object)
    pub report_data: String,
    /// Report file name inside the reports directory (default: timestamped name)
    #[serde(default)]
    pub filename: Option<String>,
    /// Report format: csv, json or html (default: csv)
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListDataFilesArgs {
    /// Glob over file names; patterns containing `/` match the relative path (default: `*.json`)
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CheckResourceStructureArgs {
    /// Path to the JSON file, relative to the data directory
    pub filepath: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MergeResourceFilesArgs {
    /// File whose new resources are appended
    pub source_file: String,
    /// File that receives the resources; it is backed up before writing
    pub dest_file: String,
}
