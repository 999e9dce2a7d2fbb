//! Command implementations for the schema-form host.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use schemaform_engine::{check_document, derive_default_state};
use schemaform_form::{FormOptions, SchemaForm};
use schemaform_model::SchemaDocument;
use schemaform_validate::{validation_report, write_validation_report_json};

use crate::cli::{RenderArgs, ValidateArgs};
use schemaform_cli::types::{RenderResult, ValidateResult};

pub fn run_render(args: &RenderArgs) -> Result<RenderResult> {
    let document = load_document(&args.schema)?;
    let data = args.data.as_deref().map(load_json).transpose()?;
    let name = form_name(&args.schema);
    let form = SchemaForm::new(
        document,
        &args.form_id,
        &name,
        data.as_ref(),
        FormOptions::default(),
    )?;
    let tree = form.field_tree()?;
    info!(
        form = %args.form_id,
        fields = tree.walk().len(),
        "rendered field tree"
    );
    Ok(RenderResult {
        form_id: args.form_id.clone(),
        state: form.state().clone(),
        tree,
    })
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    let document = load_document(&args.schema)?;
    let data = args.data.as_deref().map(load_json).transpose()?;
    // validate what the form would hold: supplied data merged over defaults
    let state = derive_default_state(&document.root, data.as_ref(), &document.definitions)?;
    let report = validation_report(&state, &document, &args.form_id);
    info!(
        form = %args.form_id,
        issues = report.issue_count(),
        "validation finished"
    );
    let report_path = match &args.report {
        Some(path) => Some(
            write_validation_report_json(path, &args.form_id, &report.issues)
                .context("writing validation report")?,
        ),
        None => None,
    };
    Ok(ValidateResult {
        report,
        report_path,
    })
}

fn load_document(path: &Path) -> Result<SchemaDocument> {
    let value = load_json(path)?;
    let document = SchemaDocument::from_value(value)
        .with_context(|| format!("loading schema document {}", path.display()))?;
    check_document(&document)
        .with_context(|| format!("checking schema references in {}", path.display()))?;
    Ok(document)
}

fn load_json(path: &Path) -> Result<Value> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}

fn form_name(schema_path: &Path) -> String {
    schema_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("form")
        .to_string()
}
