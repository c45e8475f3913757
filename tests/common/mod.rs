//! Test utilities and helper functions for the resource validator test suite

use anyhow::Result;
use kodegen_tools_resource_validator::fetcher::DelayFn;
use mockito::{Mock, Server};
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Creates a temporary directory for test output
#[allow(dead_code)]
pub fn create_test_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test HTML document with specified content
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
    <style>body {{ color: red; }}</style>
    <script>var tracking = "should not appear";</script>
</head>
<body>
    <header>Site header</header>
    <nav><a href="/">Home</a></nav>
    {}
    <footer>Copyright footer</footer>
</body>
</html>"#,
        html_escape::encode_text(title),
        body
    )
}

/// Starts a mockito server for HTTP tests
#[allow(dead_code)]
pub async fn setup_mock_server() -> Result<mockito::ServerGuard> {
    let server = Server::new_async().await;
    Ok(server)
}

/// Creates a mock that serves HTML at the given path
#[allow(dead_code)]
pub async fn create_html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock that always answers with an error status
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut Server, path: &str, status: usize, hits: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("error")
        .expect(hits)
        .create_async()
        .await
}

/// Delay function that returns immediately
#[allow(dead_code)]
pub fn no_delay() -> DelayFn {
    Arc::new(|_| Box::pin(async {}))
}

/// Three well-formed resource records
#[allow(dead_code)]
pub fn sample_records() -> Value {
    json!([
        {
            "id": "general_open_day_hse",
            "name": "Open day",
            "description": "Open day for applicants at the university",
            "website": "https://dod.hse.ru",
            "type": "event",
            "tags": ["applicants"]
        },
        {
            "id": "olympiad_math",
            "name": "Math olympiad",
            "description": "School olympiad in mathematics",
            "website": "https://olymp.hse.ru",
            "type": "olympiad"
        },
        {
            "id": "summer_school",
            "name": "Summer school",
            "description": "Summer school for high school students",
            "website": "https://school.hse.ru",
            "type": "course"
        }
    ])
}

/// Writes `value` as pretty JSON at `root/relative`, creating parents
#[allow(dead_code)]
pub fn write_json(root: &Path, relative: &str, value: &Value) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}
