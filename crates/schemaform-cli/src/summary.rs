//! Human-facing tables for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use serde_json::Value;

use schemaform_form::FieldNode;
use schemaform_model::{ValidationIssue, ValidationReport};

use crate::types::{RenderResult, ValidateResult};

pub fn print_render(result: &RenderResult) {
    println!("Form: {}", result.form_id);
    println!("State:");
    println!("{}", format_state(&result.state));
    println!("{}", field_table(&result.tree));
}

pub fn print_validation(result: &ValidateResult) {
    println!("Form: {}", result.report.form_id);
    if result.report.is_clean() {
        println!("No issues found.");
    } else {
        println!("Issues: {}", result.report.issue_count());
        println!("{}", issue_table(&result.report));
    }
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
}

/// Pretty-printed JSON for the derived state.
pub fn format_state(state: &Value) -> String {
    serde_json::to_string_pretty(state).unwrap_or_else(|_| state.to_string())
}

/// Field tree as a table, one row per node in depth-first preorder.
pub fn field_table(tree: &FieldNode) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Identifier"),
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Required"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    add_field_rows(&mut table, tree, 0);
    table
}

fn add_field_rows(table: &mut Table, node: &FieldNode, depth: usize) {
    let label = if depth == 0 {
        node.label.clone()
    } else {
        format!("{}-> {}", "  ".repeat(depth), node.label)
    };
    let value = if node.kind.is_container() {
        "-".to_string()
    } else {
        node.value.to_string()
    };
    table.add_row(vec![
        Cell::new(&node.id),
        Cell::new(label),
        Cell::new(node.kind.as_str()),
        if node.required {
            Cell::new("yes").fg(comfy_table::Color::Yellow)
        } else {
            dim_cell("-")
        },
        Cell::new(value),
    ]);
    for child in &node.children {
        add_field_rows(table, child, depth + 1);
    }
}

/// Issue list as a table, preserving validator order.
pub fn issue_table(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Path"),
        header_cell("Kind"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for issue in &report.issues {
        table.add_row(issue_row(issue));
    }
    table
}

fn issue_row(issue: &ValidationIssue) -> Vec<Cell> {
    vec![
        Cell::new(issue.path.to_string()).fg(comfy_table::Color::Blue),
        Cell::new(issue.kind.as_str())
            .fg(comfy_table::Color::Red)
            .add_attribute(Attribute::Bold),
        Cell::new(&issue.message),
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).fg(comfy_table::Color::DarkGrey)
}
