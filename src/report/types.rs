//! Report formats and the lenient record view used by every format
//!
//! Report input is whatever the caller produced, typically a list of
//! `ValidationResult` objects possibly enriched with `was_auto_corrected` and
//! `semantic_analysis`. Missing or mistyped fields degrade to empty values
//! instead of failing the report.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validator::ValidationStatus;

/// Status counted when a record carries none
pub const ERROR_STATUS: &str = "ERROR";

/// Output format of a validation report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
    Html,
}

impl ReportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Html => "html",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Aggregate counts over a set of report records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub ok: usize,
    pub needs_update: usize,
    pub mismatch: usize,
    pub error: usize,
    pub avg_confidence: f64,
    pub total: usize,
}

impl ReportSummary {
    #[must_use]
    pub fn from_records(records: &[Value]) -> Self {
        let mut summary = Self {
            ok: 0,
            needs_update: 0,
            mismatch: 0,
            error: 0,
            avg_confidence: 0.0,
            total: records.len(),
        };

        let mut confidence_sum = 0.0;
        for record in records.iter().map(ReportRecord::from_value) {
            match record.status() {
                Some(ValidationStatus::Ok) => summary.ok += 1,
                Some(ValidationStatus::NeedsUpdate) => summary.needs_update += 1,
                Some(ValidationStatus::Mismatch) => summary.mismatch += 1,
                None if record.validation_status == ERROR_STATUS => summary.error += 1,
                None => {}
            }
            confidence_sum += record.confidence;
        }

        if !records.is_empty() {
            summary.avg_confidence = confidence_sum / records.len() as f64;
        }
        summary
    }
}

/// One report row extracted from an arbitrary JSON record
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRecord {
    pub resource_id: String,
    /// `ERROR` when absent
    pub validation_status: String,
    /// Raw cell text for the status column; empty when absent
    pub status_cell: String,
    /// Raw cell text for the confidence column; empty when absent
    pub confidence_cell: String,
    /// Numeric confidence, 0 when absent or not a number
    pub confidence: f64,
    pub was_auto_corrected: bool,
    pub name_match: String,
    pub description_match: String,
    pub url_relevance: String,
    pub key_discrepancies: Vec<String>,
    pub current_description: String,
    pub suggested_description: String,
    pub reasoning: String,
}

impl ReportRecord {
    #[must_use]
    pub fn from_value(record: &Value) -> Self {
        let semantic = record.get("semantic_analysis");
        let semantic_field = |key: &str| semantic.and_then(|s| s.get(key)).map(cell).unwrap_or_default();

        let key_discrepancies = semantic
            .and_then(|s| s.get("key_discrepancies"))
            .and_then(Value::as_array)
            .map(|items| items.iter().map(cell).collect())
            .unwrap_or_default();

        Self {
            resource_id: field(record, "resource_id"),
            validation_status: record
                .get("validation_status")
                .and_then(Value::as_str)
                .unwrap_or(ERROR_STATUS)
                .to_string(),
            status_cell: field(record, "validation_status"),
            confidence_cell: field(record, "confidence"),
            confidence: record.get("confidence").and_then(Value::as_f64).unwrap_or(0.0),
            was_auto_corrected: record
                .get("was_auto_corrected")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            name_match: semantic_field("name_match"),
            description_match: semantic_field("description_match"),
            url_relevance: semantic_field("url_relevance"),
            key_discrepancies,
            current_description: field(record, "current_description"),
            suggested_description: field(record, "suggested_description"),
            reasoning: field(record, "reasoning"),
        }
    }

    /// The verdict, when the status is one of the three known ones
    #[must_use]
    pub fn status(&self) -> Option<ValidationStatus> {
        serde_json::from_value(Value::String(self.validation_status.clone())).ok()
    }
}

/// Text of a scalar JSON value; strings unquoted, null empty
fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn field(record: &Value, key: &str) -> String {
    record.get(key).map(cell).unwrap_or_default()
}
