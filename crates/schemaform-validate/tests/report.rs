//! Tests for the JSON report writer.

use std::fs;
use std::path::PathBuf;

use serde_json::json;

use schemaform_model::SchemaDocument;
use schemaform_validate::{validate_document, write_validation_report_json};

fn unique_temp_path(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "schemaform-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    dir.push("validation_report.json");
    dir
}

#[test]
fn report_payload_round_trips() {
    let doc = SchemaDocument::from_value(json!({
        "type": "object",
        "properties": {"pin": {"type": "integer", "maximum": 53}},
        "required": ["pin"],
    }))
    .expect("parse document");
    let issues = validate_document(&json!({"pin": 54}), &doc);
    assert_eq!(issues.len(), 1);

    let output_path = unique_temp_path("report");
    let written = write_validation_report_json(&output_path, "gpio-config", &issues)
        .expect("write report");
    assert_eq!(written, output_path);

    let payload: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written).expect("read report"))
            .expect("parse report");
    assert_eq!(payload["schema"], "schemaform.validation-report");
    assert_eq!(payload["form"], "gpio-config");
    assert_eq!(payload["issue_count"], 1);
    assert_eq!(payload["issues"][0]["kind"], "maximum");
    assert_eq!(payload["issues"][0]["path"], json!(["pin"]));

    fs::remove_dir_all(written.parent().expect("parent dir")).ok();
}
