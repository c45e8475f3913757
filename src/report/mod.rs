//! Validation report generation
//!
//! `ReportGenerator` turns a list of validation records into a CSV, JSON or
//! HTML file inside the reports directory. Records are arbitrary JSON objects;
//! see [`ReportRecord`] for how fields are picked out of them.

pub mod errors;
pub mod html;
pub mod types;

pub use errors::{ReportError, ReportResult};
pub use types::{ERROR_STATUS, ReportFormat, ReportRecord, ReportSummary};

use chrono::Local;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

use crate::utils::safe_truncate_chars;

/// Text columns are flattened to one line and cut to this many characters
const CSV_TEXT_MAX_CHARS: usize = 200;

const CSV_HEADER: [&str; 12] = [
    "resource_id",
    "validation_status",
    "confidence",
    "was_auto_corrected",
    "name_match",
    "description_match",
    "url_relevance",
    "key_discrepancies",
    "current_description",
    "suggested_description",
    "reasoning",
    "timestamp",
];

fn csv_text(text: &str) -> String {
    let flat = text.replace('\n', " ");
    safe_truncate_chars(&flat, CSV_TEXT_MAX_CHARS).to_string()
}

/// `validation_report_YYYYmmdd_HHMMSS.<ext>`
#[must_use]
pub fn default_filename(format: ReportFormat) -> String {
    format!(
        "validation_report_{}.{}",
        Local::now().format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Reduce a caller-supplied name to a single file name
///
/// Falls back to the default name when nothing usable remains.
#[must_use]
pub fn sanitize_report_filename(name: Option<&str>, format: ReportFormat) -> String {
    let sanitized = name
        .map(sanitize_filename::sanitize)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
        default_filename(format)
    } else {
        sanitized
    }
}

/// Writes validation reports into a directory
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    reports_dir: PathBuf,
}

impl ReportGenerator {
    /// Open a generator, creating the reports directory if needed
    pub async fn open(reports_dir: impl Into<PathBuf>) -> ReportResult<Self> {
        let reports_dir = reports_dir.into();
        if !tokio::fs::try_exists(&reports_dir).await.unwrap_or(false) {
            tokio::fs::create_dir_all(&reports_dir)
                .await
                .map_err(|e| ReportError::io(&reports_dir, e))?;
            log::info!("Created reports directory: {}", reports_dir.display());
        }
        Ok(Self { reports_dir })
    }

    #[must_use]
    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    #[must_use]
    pub fn summary(records: &[Value]) -> ReportSummary {
        ReportSummary::from_records(records)
    }

    /// Write a report in `format`, returning its path
    pub async fn generate(
        &self,
        format: ReportFormat,
        records: &[Value],
        filename: Option<&str>,
    ) -> ReportResult<PathBuf> {
        match format {
            ReportFormat::Csv => self.generate_csv(records, filename).await,
            ReportFormat::Json => self.generate_json(records, filename).await,
            ReportFormat::Html => self.generate_html(records, filename).await,
        }
    }

    pub async fn generate_csv(&self, records: &[Value], filename: Option<&str>) -> ReportResult<PathBuf> {
        let path = self.target(filename, ReportFormat::Csv);
        log::info!("Generating CSV report: {}", path.display());

        let timestamp = Local::now().to_rfc3339();
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;

        for record in records.iter().map(ReportRecord::from_value) {
            writer.write_record([
                record.resource_id.as_str(),
                record.status_cell.as_str(),
                record.confidence_cell.as_str(),
                if record.was_auto_corrected { "true" } else { "false" },
                record.name_match.as_str(),
                record.description_match.as_str(),
                record.url_relevance.as_str(),
                record.key_discrepancies.join("; ").as_str(),
                csv_text(&record.current_description).as_str(),
                csv_text(&record.suggested_description).as_str(),
                csv_text(&record.reasoning).as_str(),
                timestamp.as_str(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ReportError::io(&path, e.into_error()))?;
        self.write(&path, bytes).await?;

        log::info!("CSV report created: {} ({} records)", path.display(), records.len());
        Ok(path)
    }

    pub async fn generate_json(&self, records: &[Value], filename: Option<&str>) -> ReportResult<PathBuf> {
        let path = self.target(filename, ReportFormat::Json);
        log::info!("Generating JSON report: {}", path.display());

        let report = json!({
            "timestamp": Local::now().to_rfc3339(),
            "total_records": records.len(),
            "summary": Self::summary(records),
            "records": records,
        });
        let text = serde_json::to_string_pretty(&report)?;
        self.write(&path, text.into_bytes()).await?;

        log::info!("JSON report created: {}", path.display());
        Ok(path)
    }

    pub async fn generate_html(&self, records: &[Value], filename: Option<&str>) -> ReportResult<PathBuf> {
        let path = self.target(filename, ReportFormat::Html);
        log::info!("Generating HTML report: {}", path.display());

        let rows: Vec<ReportRecord> = records.iter().map(ReportRecord::from_value).collect();
        let generated_at = Local::now().format("%d.%m.%Y %H:%M:%S").to_string();
        let page = html::render(&rows, &Self::summary(records), &generated_at);
        self.write(&path, page.into_bytes()).await?;

        log::info!("HTML report created: {}", path.display());
        Ok(path)
    }

    fn target(&self, filename: Option<&str>, format: ReportFormat) -> PathBuf {
        self.reports_dir.join(sanitize_report_filename(filename, format))
    }

    async fn write(&self, path: &Path, bytes: Vec<u8>) -> ReportResult<()> {
        tokio::fs::write(path, bytes).await.map_err(|e| {
            log::error!("Failed to write report {}: {e}", path.display());
            ReportError::io(path, e)
        })
    }
}
