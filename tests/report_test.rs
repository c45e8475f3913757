//! Tests for CSV, JSON and HTML validation reports

use kodegen_tools_resource_validator::report::{ReportFormat, ReportGenerator};
use serde_json::{Value, json};
use tempfile::TempDir;

fn records() -> Vec<Value> {
    vec![
        json!({
            "resource_id": "general_open_day_hse",
            "validation_status": "OK",
            "confidence": 0.86,
            "current_description": "Open day\nfor applicants",
            "suggested_description": "",
            "reasoning": "Description matches site content well (match 86%)"
        }),
        json!({
            "resource_id": "olympiad_math",
            "validation_status": "MISMATCH",
            "confidence": 0.2,
            "was_auto_corrected": true,
            "semantic_analysis": {
                "name_match": false,
                "description_match": "low",
                "url_relevance": "high",
                "key_discrepancies": ["date differs", "venue differs"]
            },
            "current_description": "x".repeat(300),
            "reasoning": "Rewrite required, \"quoted\""
        }),
        json!({"resource_id": "broken"}),
    ]
}

#[tokio::test]
async fn test_csv_report_columns_and_rows() {
    let temp = TempDir::new().unwrap();
    let generator = ReportGenerator::open(temp.path()).await.unwrap();

    let path = generator
        .generate(ReportFormat::Csv, &records(), Some("weekly.csv"))
        .await
        .unwrap();
    assert_eq!(path, temp.path().join("weekly.csv"));

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), 12);
    assert_eq!(&headers[0], "resource_id");
    assert_eq!(&headers[11], "timestamp");

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 3);

    assert_eq!(&rows[0][1], "OK");
    assert_eq!(&rows[0][2], "0.86");
    assert_eq!(&rows[0][3], "false");
    assert_eq!(&rows[0][8], "Open day for applicants");

    assert_eq!(&rows[1][3], "true");
    assert_eq!(&rows[1][4], "false");
    assert_eq!(&rows[1][5], "low");
    assert_eq!(&rows[1][7], "date differs; venue differs");
    assert_eq!(rows[1][8].chars().count(), 200);
    assert_eq!(&rows[1][10], "Rewrite required, \"quoted\"");

    // Missing status stays empty in CSV; only the summary counts it as ERROR
    assert_eq!(&rows[2][1], "");
    assert_eq!(&rows[2][2], "");
    assert!(!rows[2][11].is_empty());
}

#[tokio::test]
async fn test_json_report_has_summary() {
    let temp = TempDir::new().unwrap();
    let generator = ReportGenerator::open(temp.path()).await.unwrap();

    let path = generator.generate(ReportFormat::Json, &records(), None).await.unwrap();
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("validation_report_") && name.ends_with(".json"));

    let report: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(report["total_records"], 3);
    assert_eq!(report["summary"]["ok"], 1);
    assert_eq!(report["summary"]["mismatch"], 1);
    assert_eq!(report["summary"]["error"], 1);
    assert_eq!(report["summary"]["total"], 3);
    let avg = report["summary"]["avg_confidence"].as_f64().unwrap();
    assert!((avg - (0.86 + 0.2) / 3.0).abs() < 1e-9);
    // Records are kept verbatim
    assert_eq!(report["records"][1]["semantic_analysis"]["url_relevance"], "high");
    assert!(report["timestamp"].is_string());
}

#[tokio::test]
async fn test_html_report_is_self_contained() {
    let temp = TempDir::new().unwrap();
    let generator = ReportGenerator::open(temp.path().join("reports")).await.unwrap();
    assert!(temp.path().join("reports").is_dir());

    let path = generator
        .generate(ReportFormat::Html, &records(), Some("report.html"))
        .await
        .unwrap();
    let html = std::fs::read_to_string(path).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<style>"));
    assert!(html.contains(r#"<span class="status-ok">OK</span>"#));
    assert!(html.contains(r#"<span class="status-error">MISMATCH</span>"#));
    assert!(html.contains(r#"<span class="status-error">ERROR</span>"#));
    assert!(html.contains("<td>86%</td>"));
    assert!(html.contains("&quot;quoted&quot;") || html.contains("\"quoted\""));
    assert_eq!(html.matches("<tr>").count(), 1 + 3);
}

#[tokio::test]
async fn test_empty_report_is_valid() {
    let temp = TempDir::new().unwrap();
    let generator = ReportGenerator::open(temp.path()).await.unwrap();

    let path = generator.generate(ReportFormat::Json, &[], Some("empty.json")).await.unwrap();
    let report: Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(report["total_records"], 0);
    assert_eq!(report["summary"]["avg_confidence"], 0.0);
}
