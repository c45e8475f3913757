//! JSON record store
//!
//! Resource records live in JSON files under a single data directory. Paths
//! handed to the store are always relative to that directory.
//!
//! - A file holding a single object is read as a one-element list.
//! - Writes copy the previous file to `<name>.json.backup` before overwriting.
//! - Output is pretty-printed UTF-8 with two-space indentation.

pub mod errors;
pub mod path_utils;
pub mod types;

pub use errors::{StoreError, StoreResult};
pub use types::{
    Record, ResourceIndexEntry, ResourceSummary, StructureIssue, record_id, structure_errors,
};

use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use path_utils::{backup_path, resolve_relative};

/// A page of record summaries
#[derive(Debug, Clone)]
pub struct RecordBatch {
    /// Number of records in the whole file
    pub total: usize,
    pub resources: Vec<ResourceSummary>,
}

/// Outcome of checking every record of a file
#[derive(Debug, Clone)]
pub struct StructureReport {
    pub total: usize,
    pub invalid: Vec<StructureIssue>,
}

impl StructureReport {
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.total - self.invalid.len()
    }
}

/// Compile a glob pattern (`*` and `?` wildcards) into an anchored regex
fn compile_glob_pattern(pattern: &str) -> StoreResult<Regex> {
    let mut regex_pattern = String::from("^");
    for ch in pattern.chars() {
        match ch {
            '*' => regex_pattern.push_str(".*"),
            '?' => regex_pattern.push('.'),
            other => regex_pattern.push_str(&regex::escape(&other.to_string())),
        }
    }
    regex_pattern.push('$');

    Regex::new(&regex_pattern).map_err(|e| StoreError::InvalidPath {
        path: pattern.to_string(),
        reason: format!("invalid glob pattern: {e}"),
    })
}

/// Parse file content into a list of records
pub fn parse_records(text: &str, source_name: &str) -> StoreResult<Vec<Record>> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| StoreError::malformed(source_name, e))?;
    Ok(match value {
        Value::Array(items) => items,
        other => vec![other],
    })
}

/// Record store rooted at a data directory
#[derive(Debug, Clone)]
pub struct RecordStore {
    data_dir: PathBuf,
}

impl RecordStore {
    /// Open a store, creating the data directory if it does not exist
    pub async fn open(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_dir = data_dir.into();
        if !tokio::fs::try_exists(&data_dir).await.unwrap_or(false) {
            tokio::fs::create_dir_all(&data_dir)
                .await
                .map_err(|e| StoreError::io(&data_dir, e))?;
            log::info!("Created data directory: {}", data_dir.display());
        }
        Ok(Self { data_dir })
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Absolute location of a relative record path
    pub fn resolve(&self, relative: &str) -> StoreResult<PathBuf> {
        resolve_relative(&self.data_dir, relative)
    }

    /// Read all records of a file
    pub async fn read_records(&self, relative: &str) -> StoreResult<Vec<Record>> {
        let full_path = self.resolve(relative)?;
        log::debug!("Reading file: {}", full_path.display());

        let text = match tokio::fs::read_to_string(&full_path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(full_path));
            }
            Err(e) => return Err(StoreError::io(&full_path, e)),
        };

        let records = parse_records(&text, relative)?;
        log::debug!("Loaded {} resources from {relative}", records.len());
        Ok(records)
    }

    /// Write records, backing up any existing file first
    pub async fn write_records(&self, relative: &str, records: &[Record]) -> StoreResult<PathBuf> {
        self.write_records_with_backup(relative, records, true).await
    }

    /// Write records, optionally skipping the backup
    pub async fn write_records_with_backup(
        &self,
        relative: &str,
        records: &[Record],
        backup: bool,
    ) -> StoreResult<PathBuf> {
        let full_path = self.resolve(relative)?;

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        if backup && tokio::fs::try_exists(&full_path).await.unwrap_or(false) {
            let backup = backup_path(&full_path);
            log::info!("Creating backup: {}", backup.display());
            tokio::fs::copy(&full_path, &backup)
                .await
                .map_err(|e| StoreError::io(&backup, e))?;
        }

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::malformed(relative, e))?;

        log::debug!("Writing file: {}", full_path.display());
        tokio::fs::write(&full_path, json)
            .await
            .map_err(|e| StoreError::io(&full_path, e))?;

        log::info!("Saved {} ({} resources)", full_path.display(), records.len());
        Ok(full_path)
    }

    /// The record whose `id` equals `resource_id`
    pub async fn find_by_id(&self, relative: &str, resource_id: &str) -> StoreResult<Record> {
        self.read_records(relative)
            .await?
            .into_iter()
            .find(|r| record_id(r) == Some(resource_id))
            .ok_or_else(|| StoreError::ResourceNotFound(resource_id.to_string()))
    }

    /// Summaries of `count` records starting at `start_index`
    ///
    /// Out-of-range windows yield an empty page rather than an error.
    pub async fn batch(&self, relative: &str, start_index: usize, count: usize) -> StoreResult<RecordBatch> {
        let records = self.read_records(relative).await?;
        let resources = records
            .iter()
            .skip(start_index)
            .take(count)
            .map(ResourceSummary::from_record)
            .collect();
        Ok(RecordBatch {
            total: records.len(),
            resources,
        })
    }

    /// Index, id and name of every record
    pub async fn list(&self, relative: &str) -> StoreResult<Vec<ResourceIndexEntry>> {
        let records = self.read_records(relative).await?;
        Ok(records
            .iter()
            .enumerate()
            .map(|(i, r)| ResourceIndexEntry::new(i, r))
            .collect())
    }

    /// Check every record for the required fields
    pub async fn check_structure(&self, relative: &str) -> StoreResult<StructureReport> {
        let records = self.read_records(relative).await?;
        let invalid = records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let errors = structure_errors(record);
                (!errors.is_empty()).then(|| StructureIssue {
                    index,
                    id: record.get("id").cloned().unwrap_or(Value::Null),
                    errors,
                })
            })
            .collect();
        Ok(StructureReport {
            total: records.len(),
            invalid,
        })
    }

    /// Number of records in a file; unreadable files count as zero
    pub async fn resource_count(&self, relative: &str) -> usize {
        match self.read_records(relative).await {
            Ok(records) => records.len(),
            Err(e) => {
                log::error!("Failed to count resources in {relative}: {e}");
                0
            }
        }
    }

    /// Files under the data directory matching a glob, relative and sorted
    ///
    /// Patterns without `/` match the file name at any depth; patterns with
    /// `/` match the whole relative path.
    pub async fn list_files(&self, pattern: &str) -> StoreResult<Vec<String>> {
        let matcher = compile_glob_pattern(pattern)?;
        let match_full_path = pattern.contains('/');
        let root = self.data_dir.clone();

        let files = tokio::task::spawn_blocking(move || -> StoreResult<Vec<String>> {
            let mut files = Vec::new();
            for entry in jwalk::WalkDir::new(&root).sort(true) {
                let entry = entry.map_err(|e| StoreError::io(&root, std::io::Error::other(e.to_string())))?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.path();
                let Ok(relative) = path.strip_prefix(&root) else {
                    continue;
                };
                let relative = relative.to_string_lossy().replace('\\', "/");
                let candidate = if match_full_path {
                    relative.as_str()
                } else {
                    relative.rsplit('/').next().unwrap_or(relative.as_str())
                };
                if matcher.is_match(candidate) {
                    files.push(relative);
                }
            }
            files.sort();
            Ok(files)
        })
        .await
        .map_err(|e| StoreError::io(&self.data_dir, std::io::Error::other(e.to_string())))??;

        log::info!("Found {} files matching {pattern}", files.len());
        Ok(files)
    }

    /// Append records from `source` whose ids are not yet in `dest`
    ///
    /// Records without a string `id` are skipped. Returns the number added.
    pub async fn merge_files(&self, source: &str, dest: &str) -> StoreResult<usize> {
        let source_records = self.read_records(source).await?;
        let mut dest_records = self.read_records(dest).await?;

        let mut existing: HashSet<String> = dest_records
            .iter()
            .filter_map(|r| record_id(r).map(str::to_string))
            .collect();

        let mut added = 0;
        for record in source_records {
            let Some(id) = record_id(&record).map(str::to_string) else {
                log::warn!("Skipping record without id while merging {source} into {dest}");
                continue;
            };
            if existing.insert(id) {
                dest_records.push(record);
                added += 1;
            }
        }

        self.write_records(dest, &dest_records).await?;
        log::info!("Merged {added} resources from {source} into {dest}");
        Ok(added)
    }
}
