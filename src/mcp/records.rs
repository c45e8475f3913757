//! Record file tools: reading, paging, lookup, updates and housekeeping

use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use super::errors::ToolError;
use super::tool::{ResourceTool, success};
use super::types::{
    BatchGetResourcesArgs, CheckResourceStructureArgs, GetResourceByIdArgs, ListDataFilesArgs,
    ListResourcesArgs, MergeResourceFilesArgs, ReadJsonFileArgs, UpdateJsonFileArgs,
};
use crate::store::{RecordStore, StoreError, parse_records};

/// `read_json_file`: every record of a file
#[derive(Debug, Clone)]
pub struct ReadJsonFileTool {
    store: RecordStore,
}

impl ReadJsonFileTool {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

impl ResourceTool for ReadJsonFileTool {
    type Args = ReadJsonFileArgs;

    fn name() -> &'static str {
        "read_json_file"
    }

    fn description() -> &'static str {
        "Read a JSON file of resources from the data directory. \
         Example: read_json_file({\"filepath\": \"hse/infoEvents.json\"})"
    }

    async fn execute(&self, args: Self::Args, _cancel: CancellationToken) -> Result<Value, ToolError> {
        log::info!("Reading file: {}", args.filepath);
        let records = self.store.read_records(&args.filepath).await?;
        log::info!("Loaded {} resources", records.len());
        Ok(success(json!({
            "count": records.len(),
            "data": records,
        })))
    }
}

/// `update_json_file`: replace a file's records, keeping a backup
#[derive(Debug, Clone)]
pub struct UpdateJsonFileTool {
    store: RecordStore,
}

impl UpdateJsonFileTool {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

impl ResourceTool for UpdateJsonFileTool {
    type Args = UpdateJsonFileArgs;

    fn name() -> &'static str {
        "update_json_file"
    }

    fn description() -> &'static str {
        "Overwrite a JSON file of resources with corrected data. The previous \
         file is kept as <name>.json.backup. `updated_data` is JSON text; a \
         single object is stored as a one-element list."
    }

    fn read_only() -> bool {
        false
    }

    fn destructive() -> bool {
        true
    }

    async fn execute(&self, args: Self::Args, _cancel: CancellationToken) -> Result<Value, ToolError> {
        log::info!("Updating file: {}", args.filepath);
        let records = parse_records(&args.updated_data, "updated_data")?;
        self.store.write_records(&args.filepath, &records).await?;

        log::info!("File updated: {} resources", records.len());
        Ok(success(json!({
            "filepath": args.filepath,
            "updated_count": records.len(),
            "message": format!("File {} updated successfully", args.filepath),
        })))
    }
}

/// `batch_get_resources`: a window of record summaries
#[derive(Debug, Clone)]
pub struct BatchGetResourcesTool {
    store: RecordStore,
}

impl BatchGetResourcesTool {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

impl ResourceTool for BatchGetResourcesTool {
    type Args = BatchGetResourcesArgs;

    fn name() -> &'static str {
        "batch_get_resources"
    }

    fn description() -> &'static str {
        "Get a batch of resources (id, name, description, website, type) from a \
         JSON file, starting at `start_index` (default 0) and returning up to \
         `count` (default 10) resources."
    }

    async fn execute(&self, args: Self::Args, _cancel: CancellationToken) -> Result<Value, ToolError> {
        log::info!(
            "Getting batch from {} (index: {}, count: {})",
            args.filepath,
            args.start_index,
            args.count
        );
        let batch = self
            .store
            .batch(&args.filepath, args.start_index, args.count)
            .await?;

        log::info!("Returned {} resources", batch.resources.len());
        Ok(success(json!({
            "filepath": args.filepath,
            "total_resources": batch.total,
            "batch_size": batch.resources.len(),
            "start_index": args.start_index,
            "resources": batch.resources,
        })))
    }
}

/// `list_resources`: index, id and name of every record
#[derive(Debug, Clone)]
pub struct ListResourcesTool {
    store: RecordStore,
}

impl ListResourcesTool {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

impl ResourceTool for ListResourcesTool {
    type Args = ListResourcesArgs;

    fn name() -> &'static str {
        "list_resources"
    }

    fn description() -> &'static str {
        "List the index, id and name of every resource in a JSON file."
    }

    async fn execute(&self, args: Self::Args, _cancel: CancellationToken) -> Result<Value, ToolError> {
        log::info!("Listing resources in {}", args.filepath);
        let entries = self.store.list(&args.filepath).await?;
        log::info!("Found {} resources", entries.len());
        Ok(success(json!({
            "filepath": args.filepath,
            "total_count": entries.len(),
            "resources": entries,
        })))
    }
}

/// `get_resource_by_id`: one full record
#[derive(Debug, Clone)]
pub struct GetResourceByIdTool {
    store: RecordStore,
}

impl GetResourceByIdTool {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

impl ResourceTool for GetResourceByIdTool {
    type Args = GetResourceByIdArgs;

    fn name() -> &'static str {
        "get_resource_by_id"
    }

    fn description() -> &'static str {
        "Get the full record of a resource by its id. \
         Example: get_resource_by_id({\"filepath\": \"hse/infoEvents.json\", \"resource_id\": \"general_open_day_hse\"})"
    }

    async fn execute(&self, args: Self::Args, _cancel: CancellationToken) -> Result<Value, ToolError> {
        log::info!("Getting resource {} from {}", args.resource_id, args.filepath);
        match self.store.find_by_id(&args.filepath, &args.resource_id).await {
            Ok(resource) => {
                log::info!("Resource found: {}", args.resource_id);
                Ok(success(json!({ "resource": resource })))
            }
            Err(StoreError::ResourceNotFound(id)) => {
                log::warn!("Resource not found: {id}");
                Err(ToolError::NotFound(format!("Resource {id} not found")))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// `list_data_files`: record files in the data directory with their sizes
#[derive(Debug, Clone)]
pub struct ListDataFilesTool {
    store: RecordStore,
}

impl ListDataFilesTool {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

impl ResourceTool for ListDataFilesTool {
    type Args = ListDataFilesArgs;

    fn name() -> &'static str {
        "list_data_files"
    }

    fn description() -> &'static str {
        "List JSON files in the data directory matching a glob (default *.json) \
         with the number of resources in each. Unreadable files report 0."
    }

    async fn execute(&self, args: Self::Args, _cancel: CancellationToken) -> Result<Value, ToolError> {
        let paths = self.store.list_files(&args.pattern).await?;

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let resource_count = self.store.resource_count(&path).await;
            files.push(json!({
                "path": path,
                "resource_count": resource_count,
            }));
        }

        Ok(success(json!({
            "total_count": files.len(),
            "files": files,
        })))
    }
}

/// `check_resource_structure`: required-field report for a file
#[derive(Debug, Clone)]
pub struct CheckResourceStructureTool {
    store: RecordStore,
}

impl CheckResourceStructureTool {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

impl ResourceTool for CheckResourceStructureTool {
    type Args = CheckResourceStructureArgs;

    fn name() -> &'static str {
        "check_resource_structure"
    }

    fn description() -> &'static str {
        "Check that every resource in a JSON file has non-empty string fields \
         id, name, description, website and type. Lists the offending records."
    }

    async fn execute(&self, args: Self::Args, _cancel: CancellationToken) -> Result<Value, ToolError> {
        let report = self.store.check_structure(&args.filepath).await?;
        if !report.invalid.is_empty() {
            log::warn!(
                "{} of {} resources in {} are malformed",
                report.invalid.len(),
                report.total,
                args.filepath
            );
        }

        Ok(success(json!({
            "filepath": args.filepath,
            "total": report.total,
            "valid": report.valid_count(),
            "invalid": report.invalid,
        })))
    }
}

/// `merge_resource_files`: append unseen records from one file to another
#[derive(Debug, Clone)]
pub struct MergeResourceFilesTool {
    store: RecordStore,
}

impl MergeResourceFilesTool {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

impl ResourceTool for MergeResourceFilesTool {
    type Args = MergeResourceFilesArgs;

    fn name() -> &'static str {
        "merge_resource_files"
    }

    fn description() -> &'static str {
        "Append resources from `source_file` whose ids are not already in \
         `dest_file`. The destination is backed up before it is rewritten."
    }

    fn read_only() -> bool {
        false
    }

    async fn execute(&self, args: Self::Args, _cancel: CancellationToken) -> Result<Value, ToolError> {
        let added = self.store.merge_files(&args.source_file, &args.dest_file).await?;
        Ok(success(json!({
            "added": added,
            "message": format!("Merged {added} resources from {} into {}", args.source_file, args.dest_file),
        })))
    }
}
