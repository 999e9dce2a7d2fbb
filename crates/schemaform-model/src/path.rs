use serde::{Deserialize, Serialize};
use std::fmt;

/// One step into a form-state tree: an object property name or an array index.
///
/// Serializes untagged, so a path round-trips as a plain JSON array of
/// strings and numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Name(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(index) => write!(f, "{index}"),
            PathSegment::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Ordered sequence of segments addressing a node in the form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The empty path, addressing the root of the form state.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Extend with an object property name.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Name(name.to_string()));
        Self(segments)
    }

    /// Extend with a zero-based array index.
    pub fn element(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }
}

impl From<Vec<PathSegment>> for FieldPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(root)");
        }
        let mut first = true;
        for segment in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_segments() {
        let path = FieldPath::root().child("levels").element(2).child("name");
        assert_eq!(path.to_string(), "levels.2.name");
        assert_eq!(FieldPath::root().to_string(), "(root)");
    }

    #[test]
    fn serializes_as_plain_array() {
        let path = FieldPath::root().child("a").element(0);
        let json = serde_json::to_value(&path).expect("serialize path");
        assert_eq!(json, serde_json::json!(["a", 0]));

        let round: FieldPath = serde_json::from_value(json).expect("deserialize path");
        assert_eq!(round, path);
    }
}
