//! End-to-end tests of the MCP tools through the registry and server dispatch

use kodegen_tools_resource_validator::config::FetchConfig;
use kodegen_tools_resource_validator::fetcher::WebFetcher;
use kodegen_tools_resource_validator::mcp::{ResourceValidatorServer, ToolError, ToolRegistry};
use kodegen_tools_resource_validator::report::ReportGenerator;
use kodegen_tools_resource_validator::store::RecordStore;
use kodegen_tools_resource_validator::validator::ResourceValidator;
use rmcp::model::CallToolResult;
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

mod common;
use common::{create_html_mock, create_test_html, no_delay, sample_records, setup_mock_server, write_json};

struct Fixture {
    temp: TempDir,
    registry: ToolRegistry,
}

impl Fixture {
    async fn new() -> Self {
        let temp = TempDir::new().unwrap();
        write_json(&temp.path().join("data"), "hse/infoEvents.json", &sample_records()).unwrap();

        let store = RecordStore::open(temp.path().join("data")).await.unwrap();
        let reports = ReportGenerator::open(temp.path().join("reports")).await.unwrap();
        let fetcher = WebFetcher::with_delay(FetchConfig::default(), no_delay()).unwrap();
        let registry = ToolRegistry::with_all_tools(
            store,
            Arc::new(fetcher),
            Arc::new(ResourceValidator::new()),
            reports,
        );
        Self { temp, registry }
    }

    async fn call(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let args = args.as_object().cloned();
        self.registry
            .call(name, args, CancellationToken::new())
            .await
            .expect("tool is registered")
    }
}

fn payload(result: &CallToolResult) -> Value {
    let text = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .expect("text content");
    serde_json::from_str(&text.text).unwrap()
}

#[tokio::test]
async fn test_all_tools_are_registered_with_schemas() {
    let fixture = Fixture::new().await;
    let names = fixture.registry.names();
    assert_eq!(names.len(), 11);
    for name in [
        "read_json_file",
        "fetch_webpage",
        "validate_resource",
        "batch_get_resources",
        "update_json_file",
        "save_validation_report",
        "list_resources",
        "get_resource_by_id",
        "list_data_files",
        "check_resource_structure",
        "merge_resource_files",
    ] {
        assert!(fixture.registry.contains(name), "missing tool {name}");
    }

    let tools = fixture.registry.list();
    let update = tools.iter().find(|t| t.name == "update_json_file").unwrap();
    let annotations = update.annotations.as_ref().unwrap();
    assert_eq!(annotations.destructive_hint, Some(true));
    assert_eq!(annotations.read_only_hint, Some(false));
    assert!(update.input_schema.contains_key("properties"));
}

#[tokio::test]
async fn test_read_json_file_returns_all_records() {
    let fixture = Fixture::new().await;
    let out = fixture
        .call("read_json_file", json!({"filepath": "hse/infoEvents.json"}))
        .await
        .unwrap();
    assert_eq!(out["status"], "success");
    assert_eq!(out["count"], 3);
    assert_eq!(out["data"][0]["id"], "general_open_day_hse");
}

#[tokio::test]
async fn test_batch_get_resources_windows_and_summarizes() {
    let fixture = Fixture::new().await;
    let out = fixture
        .call(
            "batch_get_resources",
            json!({"filepath": "hse/infoEvents.json", "start_index": 1, "count": 5}),
        )
        .await
        .unwrap();
    assert_eq!(out["total_resources"], 3);
    assert_eq!(out["batch_size"], 2);
    assert_eq!(out["start_index"], 1);
    assert_eq!(out["resources"][0]["id"], "olympiad_math");
    // Summaries carry only the five core fields
    assert!(out["resources"][0].get("tags").is_none());
}

#[tokio::test]
async fn test_list_resources_and_get_by_id() {
    let fixture = Fixture::new().await;
    let list = fixture
        .call("list_resources", json!({"filepath": "hse/infoEvents.json"}))
        .await
        .unwrap();
    assert_eq!(list["total_count"], 3);
    assert_eq!(list["resources"][2]["index"], 2);
    assert_eq!(list["resources"][2]["id"], "summer_school");

    let found = fixture
        .call(
            "get_resource_by_id",
            json!({"filepath": "hse/infoEvents.json", "resource_id": "olympiad_math"}),
        )
        .await
        .unwrap();
    assert_eq!(found["resource"]["name"], "Math olympiad");
}

#[tokio::test]
async fn test_unknown_resource_id_is_reported_as_error_payload() {
    let fixture = Fixture::new().await;
    let server = ResourceValidatorServer::new(fixture.registry.clone());

    let args = json!({"filepath": "hse/infoEvents.json", "resource_id": "nope"});
    let result = server
        .dispatch("get_resource_by_id", args.as_object().cloned(), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    let body = payload(&result);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Resource nope not found");
}

#[tokio::test]
async fn test_missing_file_and_bad_arguments_are_tool_errors() {
    let fixture = Fixture::new().await;
    let err = fixture
        .call("read_json_file", json!({"filepath": "missing.json"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Store(ref e) if e.is_not_found()));

    let err = fixture.call("read_json_file", json!({})).await.unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments(_)));
}

#[tokio::test]
async fn test_unknown_tool_is_a_protocol_error() {
    let fixture = Fixture::new().await;
    let server = ResourceValidatorServer::new(fixture.registry.clone());
    assert!(
        server
            .dispatch("drop_database", None, CancellationToken::new())
            .await
            .is_err()
    );
    assert!(
        fixture
            .registry
            .call("drop_database", None, CancellationToken::new())
            .await
            .is_none()
    );
}

#[tokio::test]
async fn test_update_json_file_wraps_single_object_and_backs_up() {
    let fixture = Fixture::new().await;
    let updated = json!({"id": "only", "name": "Only one"}).to_string();
    let out = fixture
        .call(
            "update_json_file",
            json!({"filepath": "hse/infoEvents.json", "updated_data": updated}),
        )
        .await
        .unwrap();
    assert_eq!(out["updated_count"], 1);

    let data_dir = fixture.temp.path().join("data").join("hse");
    assert!(data_dir.join("infoEvents.json.backup").exists());
    let reread = fixture
        .call("read_json_file", json!({"filepath": "hse/infoEvents.json"}))
        .await
        .unwrap();
    assert_eq!(reread["count"], 1);
    assert_eq!(reread["data"][0]["id"], "only");
}

#[tokio::test]
async fn test_update_json_file_rejects_malformed_data() {
    let fixture = Fixture::new().await;
    let err = fixture
        .call(
            "update_json_file",
            json!({"filepath": "hse/infoEvents.json", "updated_data": "[{"}),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Store(_)));

    // Original file untouched
    let reread = fixture
        .call("read_json_file", json!({"filepath": "hse/infoEvents.json"}))
        .await
        .unwrap();
    assert_eq!(reread["count"], 3);
}

#[tokio::test]
async fn test_validate_resource_matching_description() {
    let fixture = Fixture::new().await;
    let description = "День открытых дверей для абитуриентов факультета";
    let out = fixture
        .call(
            "validate_resource",
            json!({
                "resource_id": "general_open_day_hse",
                "current_description": description,
                "webpage_content": description,
            }),
        )
        .await
        .unwrap();

    assert_eq!(out["status"], "success");
    assert_eq!(out["resource_id"], "general_open_day_hse");
    assert_eq!(out["validation_status"], "OK");
    assert_eq!(out["suggested_description"], "");
    let confidence = out["confidence"].as_f64().unwrap();
    assert!(confidence > 0.75 && confidence <= 1.0);
}

#[tokio::test]
async fn test_validate_resource_accepts_empty_inputs() {
    let fixture = Fixture::new().await;
    let out = fixture
        .call(
            "validate_resource",
            json!({"resource_id": "r1", "current_description": "", "webpage_content": ""}),
        )
        .await
        .unwrap();

    assert_eq!(out["status"], "success");
    assert_eq!(out["resource_id"], "r1");
    let confidence = out["confidence"].as_f64().unwrap();
    assert!(confidence.is_finite());
    // 0.4 * 0.5 + 0.4 * 1.0 + 0.2 * 0.4
    assert_eq!(confidence, 0.68);
    assert_eq!(out["validation_status"], "NEEDS_UPDATE");
    assert_eq!(out["scores"]["keywords"], 0.5);
    assert_eq!(out["scores"]["similarity"], 1.0);
    assert_eq!(out["suggested_description"], "");
}

#[tokio::test]
async fn test_validate_resource_unrelated_description() {
    let fixture = Fixture::new().await;
    let out = fixture
        .call(
            "validate_resource",
            json!({
                "resource_id": "x",
                "current_description": "Олимпиада по математике для школьников",
                "webpage_content": "Concert schedule and ticket prices for the summer festival season",
            }),
        )
        .await
        .unwrap();
    assert_eq!(out["validation_status"], "MISMATCH");
    assert_ne!(out["suggested_description"], "");
}

#[tokio::test]
async fn test_fetch_webpage_tool_uses_default_max_chars() {
    let fixture = Fixture::new().await;
    let mut server = setup_mock_server().await.unwrap();
    let body = format!("<p>{}</p>", "a".repeat(5000));
    let _mock = create_html_mock(&mut server, "/page", &create_test_html("Page", &body)).await;

    let out = fixture
        .call("fetch_webpage", json!({"url": format!("{}/page", server.url())}))
        .await
        .unwrap();
    assert_eq!(out["length"], 3000);
    assert_eq!(out["content"].as_str().unwrap().chars().count(), 3000);

    let out = fixture
        .call(
            "fetch_webpage",
            json!({"url": format!("{}/page", server.url()), "max_chars": 50}),
        )
        .await
        .unwrap();
    assert_eq!(out["length"], 50);
}

#[tokio::test]
async fn test_fetch_webpage_invalid_url_is_error() {
    let fixture = Fixture::new().await;
    let err = fixture
        .call("fetch_webpage", json!({"url": "file:///etc/passwd"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Fetch(_)));
}

#[tokio::test]
async fn test_save_validation_report_writes_into_reports_dir() {
    let fixture = Fixture::new().await;
    let report = json!([
        {"resource_id": "a", "validation_status": "OK", "confidence": 0.9},
        {"resource_id": "b", "validation_status": "MISMATCH", "confidence": 0.2}
    ])
    .to_string();

    let out = fixture
        .call(
            "save_validation_report",
            json!({"report_data": report, "filename": "../weekly.json", "format": "json"}),
        )
        .await
        .unwrap();
    assert_eq!(out["record_count"], 2);

    let path = std::path::PathBuf::from(out["filepath"].as_str().unwrap());
    assert_eq!(path.parent().unwrap(), fixture.temp.path().join("reports"));
    let written: Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(written["summary"]["ok"], 1);
    assert_eq!(written["summary"]["mismatch"], 1);
}

#[tokio::test]
async fn test_list_data_files_check_structure_and_merge() {
    let fixture = Fixture::new().await;
    let data_dir = fixture.temp.path().join("data");
    write_json(
        &data_dir,
        "extra.json",
        &json!([
            {"id": "olympiad_math", "name": "Duplicate"},
            {"id": "winter_school", "name": "Winter school", "description": "", "website": "https://w", "type": "course"}
        ]),
    )
    .unwrap();

    let files = fixture.call("list_data_files", json!({})).await.unwrap();
    assert_eq!(files["total_count"], 2);
    assert_eq!(files["files"][0]["path"], "extra.json");
    assert_eq!(files["files"][0]["resource_count"], 2);

    let structure = fixture
        .call("check_resource_structure", json!({"filepath": "extra.json"}))
        .await
        .unwrap();
    assert_eq!(structure["total"], 2);
    assert_eq!(structure["valid"], 0);
    assert_eq!(structure["invalid"].as_array().unwrap().len(), 2);

    let merged = fixture
        .call(
            "merge_resource_files",
            json!({"source_file": "extra.json", "dest_file": "hse/infoEvents.json"}),
        )
        .await
        .unwrap();
    assert_eq!(merged["added"], 1);

    let list = fixture
        .call("list_resources", json!({"filepath": "hse/infoEvents.json"}))
        .await
        .unwrap();
    assert_eq!(list["total_count"], 4);
    assert_eq!(list["resources"][3]["id"], "winter_school");
}
