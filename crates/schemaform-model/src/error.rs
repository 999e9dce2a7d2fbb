use thiserror::Error;

/// Configuration errors raised while loading or resolving a schema document.
///
/// Validation findings are never reported through this type; they are
/// collected as [`crate::ValidationIssue`] data instead.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("unresolved $ref: no definition named `{0}`")]
    UnresolvedRef(String),
    #[error("cyclic $ref chain through definition `{0}`")]
    CyclicRef(String),
    #[error("path `{0}` is not addressed by the schema")]
    UnknownPath(String),
    #[error("malformed schema document: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
