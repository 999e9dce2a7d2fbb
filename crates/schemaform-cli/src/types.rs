use std::path::PathBuf;

use serde_json::Value;

use schemaform_form::FieldNode;
use schemaform_model::ValidationReport;

/// Outcome of the `render` command.
#[derive(Debug)]
pub struct RenderResult {
    pub form_id: String,
    pub state: Value,
    pub tree: FieldNode,
}

/// Outcome of the `validate` command.
#[derive(Debug)]
pub struct ValidateResult {
    pub report: ValidationReport,
    pub report_path: Option<PathBuf>,
}
