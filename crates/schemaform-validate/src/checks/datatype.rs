use serde_json::Value;

use schemaform_model::{FieldPath, IssueKind, Schema, ValidationIssue};

/// Runtime kind of a state value, for diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The state value's runtime kind must match the schema's declared type.
/// Schemas without a declared type constrain nothing.
pub fn type_issue(state: &Value, schema: &Schema, path: &FieldPath) -> Option<ValidationIssue> {
    let declared = schema.schema_type?;
    if declared.matches_value(state) {
        return None;
    }
    Some(ValidationIssue {
        path: path.clone(),
        message: format!("expected {}, found {}", declared, value_kind(state)),
        kind: IssueKind::Type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn typed(name: &str) -> Schema {
        serde_json::from_value(json!({"type": name})).expect("parse schema")
    }

    #[test]
    fn mismatch_is_reported() {
        let issue = type_issue(&json!("four"), &typed("integer"), &FieldPath::root())
            .expect("type issue");
        assert_eq!(issue.kind, IssueKind::Type);
        assert_eq!(issue.message, "expected integer, found string");
    }

    #[test]
    fn match_and_untyped_pass() {
        assert!(type_issue(&json!(4), &typed("integer"), &FieldPath::root()).is_none());
        assert!(type_issue(&json!(4), &Schema::default(), &FieldPath::root()).is_none());
    }
}
