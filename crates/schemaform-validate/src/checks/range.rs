use serde_json::Value;

use schemaform_model::{FieldPath, IssueKind, Schema, ValidationIssue};

/// `minimum`/`maximum` bounds on numeric values. Non-numeric values are the
/// type rule's business and produce no range issue.
pub fn range_issues(state: &Value, schema: &Schema, path: &FieldPath) -> Vec<ValidationIssue> {
    let Some(number) = state.as_f64() else {
        return Vec::new();
    };
    let mut issues = Vec::new();
    if let Some(minimum) = schema.minimum
        && number < minimum
    {
        issues.push(ValidationIssue {
            path: path.clone(),
            message: format!("value {number} is below the minimum of {minimum}"),
            kind: IssueKind::Minimum,
        });
    }
    if let Some(maximum) = schema.maximum
        && number > maximum
    {
        issues.push(ValidationIssue {
            path: path.clone(),
            message: format!("value {number} is above the maximum of {maximum}"),
            kind: IssueKind::Maximum,
        });
    }
    issues
}
