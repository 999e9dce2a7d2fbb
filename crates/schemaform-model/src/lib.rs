pub mod error;
pub mod ids;
pub mod issue;
pub mod path;
pub mod schema;

pub use error::{Result, SchemaError};
pub use ids::{ID_SEPARATOR, IdSchema, ROOT_ID, child_id};
pub use issue::{IssueKind, ValidationIssue, ValidationReport};
pub use path::{FieldPath, PathSegment};
pub use schema::{Definitions, MAX_SCHEMA_DEPTH, Schema, SchemaDocument, SchemaType};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts() {
        let mut report = ValidationReport::new("gpio-config");
        report.issues.push(ValidationIssue {
            path: FieldPath::root().child("pin"),
            message: "required property `pin` is missing".to_string(),
            kind: IssueKind::Required,
        });
        assert!(!report.is_clean());
        assert_eq!(report.issue_count(), 1);
        assert_eq!(report.issues_at(&FieldPath::root().child("pin")).len(), 1);
        assert!(report.issues_at(&FieldPath::root()).is_empty());
    }

    #[test]
    fn issue_serializes() {
        let issue = ValidationIssue {
            path: FieldPath::root().child("pins").element(1),
            message: "expected integer, found string".to_string(),
            kind: IssueKind::Type,
        };
        let json = serde_json::to_string(&issue).expect("serialize issue");
        let round: ValidationIssue = serde_json::from_str(&json).expect("deserialize issue");
        assert_eq!(round, issue);
        assert!(json.contains(r#""kind":"type""#));
    }
}
