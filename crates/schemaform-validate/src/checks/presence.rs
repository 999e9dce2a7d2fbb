use serde_json::Value;

use schemaform_model::{FieldPath, IssueKind, Schema, ValidationIssue};

/// Every name in an object schema's `required` list must be present in the
/// state node. Errors are attributed to the missing child's path. A state
/// node that is not an object reports every required name as missing.
pub fn required_issues(state: &Value, schema: &Schema, path: &FieldPath) -> Vec<ValidationIssue> {
    let Some(required) = schema.required.as_ref() else {
        return Vec::new();
    };
    let state_map = state.as_object();
    required
        .iter()
        .filter(|name| !state_map.is_some_and(|map| map.contains_key(name.as_str())))
        .map(|name| ValidationIssue {
            path: path.child(name),
            message: format!("required property `{name}` is missing"),
            kind: IssueKind::Required,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Schema {
        serde_json::from_value(json!({
            "type": "object",
            "properties": {"pin": {"type": "integer"}, "name": {"type": "string"}},
            "required": ["pin", "name"],
        }))
        .expect("parse schema")
    }

    #[test]
    fn reports_each_missing_name_at_child_path() {
        let issues = required_issues(&json!({"pin": 4}), &schema(), &FieldPath::root());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, FieldPath::root().child("name"));
        assert_eq!(issues[0].kind, IssueKind::Required);
    }

    #[test]
    fn null_counts_as_present() {
        let issues =
            required_issues(&json!({"pin": null, "name": null}), &schema(), &FieldPath::root());
        assert!(issues.is_empty());
    }

    #[test]
    fn non_object_state_reports_all_names() {
        let issues = required_issues(&json!("not an object"), &schema(), &FieldPath::root());
        assert_eq!(issues.len(), 2);
    }
}
