use serde_json::Value;

use schemaform_model::{FieldPath, IssueKind, Schema, ValidationIssue};

/// `minLength`/`maxLength` bounds on string values, counted in characters.
/// Non-string values are the type rule's business.
pub fn length_issues(state: &Value, schema: &Schema, path: &FieldPath) -> Vec<ValidationIssue> {
    let Some(text) = state.as_str() else {
        return Vec::new();
    };
    let length = text.chars().count() as u64;
    let mut issues = Vec::new();
    if let Some(min_length) = schema.min_length
        && length < min_length
    {
        issues.push(ValidationIssue {
            path: path.clone(),
            message: format!("value is {length} character(s), shorter than the minimum of {min_length}"),
            kind: IssueKind::MinLength,
        });
    }
    if let Some(max_length) = schema.max_length
        && length > max_length
    {
        issues.push(ValidationIssue {
            path: path.clone(),
            message: format!("value is {length} character(s), longer than the maximum of {max_length}"),
            kind: IssueKind::MaxLength,
        });
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bounded() -> Schema {
        serde_json::from_value(json!({"type": "string", "minLength": 1, "maxLength": 8}))
            .expect("parse schema")
    }

    #[test]
    fn out_of_bounds_lengths_are_reported() {
        let short = length_issues(&json!(""), &bounded(), &FieldPath::root());
        assert_eq!(short.len(), 1);
        assert_eq!(short[0].kind, IssueKind::MinLength);

        let long = length_issues(&json!("nine chars"), &bounded(), &FieldPath::root());
        assert_eq!(long.len(), 1);
        assert_eq!(long[0].kind, IssueKind::MaxLength);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 8 characters but 9 bytes
        assert!(length_issues(&json!("café pin"), &bounded(), &FieldPath::root()).is_empty());
    }
}
