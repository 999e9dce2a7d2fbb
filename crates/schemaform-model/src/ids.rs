use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifier assigned to the form root when no parent id is supplied.
pub const ROOT_ID: &str = "root";

/// Separator joining path segments into an identifier.
pub const ID_SEPARATOR: &str = "_";

/// Form an identifier for a child node from its parent's identifier and the
/// child's path segment (property name or decimal index).
pub fn child_id(parent: &str, segment: &str) -> String {
    format!("{parent}{ID_SEPARATOR}{segment}")
}

/// Tree of stable, path-derived field identifiers mirroring the data shape.
///
/// Object nodes populate `properties`, array nodes populate `items` (one
/// entry per element of the data the tree was built from), primitives carry
/// neither. Identifiers are unique across the tree and deterministic for a
/// given schema and data shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSchema {
    pub id: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, IdSchema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<IdSchema>,
}

impl IdSchema {
    /// A childless node with the given identifier.
    pub fn leaf(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// All identifiers in the tree, in depth-first preorder.
    pub fn all_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids<'a>(&'a self, ids: &mut Vec<&'a str>) {
        ids.push(self.id.as_str());
        for child in self.properties.values() {
            child.collect_ids(ids);
        }
        for child in &self.items {
            child.collect_ids(ids);
        }
    }
}
