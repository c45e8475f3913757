//! Record shapes handed out by the store
//!
//! Records are kept as raw JSON objects so fields the store does not know
//! about survive a read-modify-write cycle untouched.

use serde::Serialize;
use serde_json::Value;

use crate::utils::REQUIRED_RESOURCE_FIELDS;

/// A single resource record as stored on disk
pub type Record = Value;

fn field(record: &Record, name: &str) -> Value {
    record.get(name).cloned().unwrap_or(Value::Null)
}

/// The core fields of a record, as returned by batch listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceSummary {
    pub id: Value,
    pub name: Value,
    pub description: Value,
    pub website: Value,
    #[serde(rename = "type")]
    pub resource_type: Value,
}

impl ResourceSummary {
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: field(record, "id"),
            name: field(record, "name"),
            description: record
                .get("description")
                .cloned()
                .unwrap_or_else(|| Value::String(String::new())),
            website: field(record, "website"),
            resource_type: field(record, "type"),
        }
    }
}

/// Position, id and name of a record, as returned by full listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceIndexEntry {
    pub index: usize,
    pub id: Value,
    pub name: Value,
}

impl ResourceIndexEntry {
    #[must_use]
    pub fn new(index: usize, record: &Record) -> Self {
        Self {
            index,
            id: field(record, "id"),
            name: field(record, "name"),
        }
    }
}

/// Structural problems found in one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureIssue {
    pub index: usize,
    pub id: Value,
    pub errors: Vec<String>,
}

/// Check a record for the required non-empty string fields
///
/// Returns one message per offending field; an empty list means the record is valid.
#[must_use]
pub fn structure_errors(record: &Record) -> Vec<String> {
    let Some(object) = record.as_object() else {
        return vec!["Record is not a JSON object".to_string()];
    };

    REQUIRED_RESOURCE_FIELDS
        .iter()
        .filter_map(|&name| match object.get(name) {
            None => Some(format!("Missing field: {name}")),
            Some(Value::String(s)) if s.trim().is_empty() => Some(format!("Field {name} is empty")),
            Some(Value::String(_)) => None,
            Some(_) => Some(format!("Field {name} must be a string")),
        })
        .collect()
}

/// Read the `id` of a record as a string, if it has one
#[must_use]
pub fn record_id(record: &Record) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}
