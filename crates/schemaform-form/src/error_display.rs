//! Plain-text rendering of the current error list.

use schemaform_model::ValidationIssue;

/// Render the error list, one `path: message` line per issue. Pure function
/// of its input; callers re-render wholesale after every validation pass,
/// and an empty list renders as an empty string (clearing prior errors).
pub fn render_errors(issues: &[ValidationIssue]) -> String {
    let mut out = String::new();
    for issue in issues {
        out.push_str(&format!("{}: {}\n", issue.path, issue.message));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemaform_model::{FieldPath, IssueKind};

    #[test]
    fn one_line_per_issue() {
        let issues = vec![
            ValidationIssue {
                path: FieldPath::root().child("pin"),
                message: "required property `pin` is missing".to_string(),
                kind: IssueKind::Required,
            },
            ValidationIssue {
                path: FieldPath::root().child("direction"),
                message: "expected string, found number".to_string(),
                kind: IssueKind::Type,
            },
        ];
        assert_eq!(
            render_errors(&issues),
            "pin: required property `pin` is missing\n\
             direction: expected string, found number\n"
        );
    }

    #[test]
    fn empty_list_renders_empty() {
        assert_eq!(render_errors(&[]), "");
    }
}
