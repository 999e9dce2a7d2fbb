use serde::{Deserialize, Serialize};
use std::fmt;

use crate::path::FieldPath;

/// Validation rule identifier attached to every issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueKind {
    Required,
    Type,
    Enum,
    Minimum,
    Maximum,
    MinLength,
    MaxLength,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Required => "required",
            IssueKind::Type => "type",
            IssueKind::Enum => "enum",
            IssueKind::Minimum => "minimum",
            IssueKind::Maximum => "maximum",
            IssueKind::MinLength => "minLength",
            IssueKind::MaxLength => "maxLength",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validation issue found while checking form state against its schema.
///
/// Issues are plain data: they are recomputed wholesale on every validation
/// pass and never patched incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Path of the offending node, addressable by the host for highlighting.
    pub path: FieldPath,
    /// Human-readable message describing the issue.
    pub message: String,
    /// Which rule produced the issue.
    pub kind: IssueKind,
}

/// Validation outcome for a single form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(rename = "form")]
    pub form_id: String,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new(form_id: &str) -> Self {
        Self {
            form_id: form_id.to_string(),
            issues: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Issues whose path starts at the given node, for per-field highlighting.
    pub fn issues_at<'a>(&'a self, path: &FieldPath) -> Vec<&'a ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.path == *path)
            .collect()
    }
}
