//! Depth-first validation of form state against a schema document.
//!
//! Validation findings are data, never errors: the walker does not throw for
//! structurally malformed input, and unexpected shapes degrade to a
//! type-mismatch issue. Issues come back in a stable order — depth-first,
//! parent before children, object properties in schema-declaration order,
//! array elements in index order.

pub mod checks;

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use schemaform_engine::resolve_ref;
use schemaform_model::{
    Definitions, FieldPath, MAX_SCHEMA_DEPTH, Schema, SchemaDocument, SchemaType, ValidationIssue,
    ValidationReport,
};

/// Validate form state against a schema and its definitions.
pub fn validate(state: &Value, schema: &Schema, definitions: &Definitions) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    validate_node(state, schema, definitions, &FieldPath::root(), &mut issues, 0);
    issues
}

/// Validate against a whole document.
pub fn validate_document(state: &Value, document: &SchemaDocument) -> Vec<ValidationIssue> {
    validate(state, &document.root, &document.definitions)
}

/// Validate and wrap the result in a report for the given form.
pub fn validation_report(
    state: &Value,
    document: &SchemaDocument,
    form_id: &str,
) -> ValidationReport {
    let mut report = ValidationReport::new(form_id);
    report.issues = validate_document(state, document);
    report
}

fn validate_node(
    state: &Value,
    schema: &Schema,
    definitions: &Definitions,
    path: &FieldPath,
    issues: &mut Vec<ValidationIssue>,
    depth: usize,
) {
    let schema = match resolve_ref(schema, definitions) {
        Ok(schema) => schema,
        // unresolvable subtrees are a configuration mistake caught at form
        // construction; mid-validation they constrain nothing
        Err(error) => {
            tracing::debug!(%error, %path, "skipping unresolvable subschema");
            return;
        }
    };
    if depth >= MAX_SCHEMA_DEPTH {
        return;
    }

    if let Some(issue) = checks::type_issue(state, schema, path) {
        issues.push(issue);
    }
    if let Some(issue) = checks::enum_issue(state, schema, path) {
        issues.push(issue);
    }
    issues.extend(checks::range_issues(state, schema, path));
    issues.extend(checks::length_issues(state, schema, path));

    match schema.schema_type {
        Some(SchemaType::Object) => {
            issues.extend(checks::required_issues(state, schema, path));
            if let Some(properties) = &schema.properties {
                let state_map = state.as_object();
                for (name, child) in properties {
                    // absent properties are the required rule's business
                    if let Some(child_state) = state_map.and_then(|map| map.get(name)) {
                        validate_node(
                            child_state,
                            child,
                            definitions,
                            &path.child(name),
                            issues,
                            depth + 1,
                        );
                    }
                }
            }
        }
        Some(SchemaType::Array) => {
            if let (Some(item_schema), Some(elements)) = (&schema.items, state.as_array()) {
                for (index, element) in elements.iter().enumerate() {
                    validate_node(
                        element,
                        item_schema,
                        definitions,
                        &path.element(index),
                        issues,
                        depth + 1,
                    );
                }
            }
        }
        _ => {}
    }
}

const REPORT_SCHEMA: &str = "schemaform.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ValidationReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub form: &'a str,
    pub issue_count: usize,
    pub issues: &'a [ValidationIssue],
}

/// Write a validation report as pretty-printed JSON.
pub fn write_validation_report_json(
    output_path: &Path,
    form_id: &str,
    issues: &[ValidationIssue],
) -> Result<PathBuf> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let payload = ValidationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        form: form_id,
        issue_count: issues.len(),
        issues,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output_path, format!("{json}\n"))?;
    Ok(output_path.to_path_buf())
}
