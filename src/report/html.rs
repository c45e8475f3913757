//! Self-contained HTML rendering of a validation report

use html_escape::encode_text;
use std::fmt::Write;

use super::types::{ReportRecord, ReportSummary};

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; margin: 20px; background-color: #f5f5f5; }
        .container { max-width: 1200px; margin: 0 auto; background-color: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        h1 { color: #333; border-bottom: 3px solid #2196F3; padding-bottom: 10px; }
        .summary { display: grid; grid-template-columns: repeat(4, 1fr); gap: 15px; margin: 20px 0; }
        .stat { background-color: #f9f9f9; padding: 15px; border-radius: 5px; text-align: center; border-left: 4px solid #2196F3; }
        .stat-value { font-size: 24px; font-weight: bold; color: #2196F3; }
        .stat-label { font-size: 12px; color: #666; text-transform: uppercase; }
        .ok { border-left-color: #4CAF50; color: #4CAF50; }
        .warning { border-left-color: #FF9800; color: #FF9800; }
        .error { border-left-color: #f44336; color: #f44336; }
        table { width: 100%; border-collapse: collapse; margin: 20px 0; }
        th { background-color: #2196F3; color: white; padding: 12px; text-align: left; }
        td { padding: 12px; border-bottom: 1px solid #ddd; }
        tr:hover { background-color: #f5f5f5; }
        .status-ok, .status-warning, .status-error { padding: 4px 8px; border-radius: 4px; font-weight: bold; }
        .status-ok { background-color: #c8e6c9; color: #2e7d32; }
        .status-warning { background-color: #ffe0b2; color: #e65100; }
        .status-error { background-color: #ffcdd2; color: #c62828; }
        .description { max-width: 300px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
        footer { margin-top: 30px; padding-top: 20px; border-top: 1px solid #ddd; color: #999; font-size: 12px; }
"#;

/// CSS class of the status badge
#[must_use]
pub fn status_class(status: &str) -> &'static str {
    match status {
        "OK" => "status-ok",
        "NEEDS_UPDATE" => "status-warning",
        _ => "status-error",
    }
}

fn percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// Render the full report page
#[must_use]
pub fn render(records: &[ReportRecord], summary: &ReportSummary, generated_at: &str) -> String {
    let mut html = String::with_capacity(4096 + records.len() * 512);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("    <title>Resource validation report</title>\n");
    html.push_str("    <style>");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n    <div class=\"container\">\n");
    html.push_str("        <h1>Resource validation report</h1>\n");

    // Writing to a String cannot fail
    let _ = write!(
        html,
        r#"        <div class="summary">
            <div class="stat ok"><div class="stat-value">{}</div><div class="stat-label">OK</div></div>
            <div class="stat warning"><div class="stat-value">{}</div><div class="stat-label">Needs update</div></div>
            <div class="stat error"><div class="stat-value">{}</div><div class="stat-label">Mismatch</div></div>
            <div class="stat"><div class="stat-value">{}</div><div class="stat-label">Average confidence</div></div>
        </div>
"#,
        summary.ok,
        summary.needs_update,
        summary.mismatch,
        percent(summary.avg_confidence),
    );

    html.push_str(
        r#"        <h2>Results</h2>
        <table>
            <thead>
                <tr><th>Resource ID</th><th>Status</th><th>Confidence</th><th>Description</th><th>Recommendation</th></tr>
            </thead>
            <tbody>
"#,
    );

    for record in records {
        let _ = write!(
            html,
            r#"                <tr>
                    <td><code>{}</code></td>
                    <td><span class="{}">{}</span></td>
                    <td>{}</td>
                    <td><div class="description">{}</div></td>
                    <td>{}</td>
                </tr>
"#,
            encode_text(&record.resource_id),
            status_class(&record.validation_status),
            encode_text(&record.validation_status),
            percent(record.confidence),
            encode_text(&record.current_description),
            encode_text(&record.reasoning),
        );
    }

    let _ = write!(
        html,
        r#"            </tbody>
        </table>

        <footer>
            <p>Report generated {}</p>
        </footer>
    </div>
</body>
</html>
"#,
        encode_text(generated_at)
    );

    html
}
