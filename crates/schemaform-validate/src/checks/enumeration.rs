use serde_json::Value;

use schemaform_model::{FieldPath, IssueKind, Schema, ValidationIssue};

const MAX_LISTED_MEMBERS: usize = 8;

/// When `enum` is declared, the value must equal one of its members by value
/// equality.
pub fn enum_issue(state: &Value, schema: &Schema, path: &FieldPath) -> Option<ValidationIssue> {
    let members = schema.enum_values.as_ref()?;
    if members.iter().any(|member| member == state) {
        return None;
    }
    Some(ValidationIssue {
        path: path.clone(),
        message: format!(
            "value {} is not one of the allowed values: {}",
            state,
            member_list(members)
        ),
        kind: IssueKind::Enum,
    })
}

fn member_list(members: &[Value]) -> String {
    let mut listed: Vec<String> = members
        .iter()
        .take(MAX_LISTED_MEMBERS)
        .map(|member| member.to_string())
        .collect();
    if members.len() > MAX_LISTED_MEMBERS {
        listed.push("...".to_string());
    }
    listed.join(", ")
}
