//! Identifier-tree construction.

use serde_json::Value;

use schemaform_model::{
    Definitions, IdSchema, MAX_SCHEMA_DEPTH, ROOT_ID, Result, Schema, SchemaType, child_id,
};

use crate::resolve::resolve_ref;

/// Build the identifier tree for a schema.
///
/// The root identifier defaults to [`ROOT_ID`] when no parent id is given;
/// children join the parent id, the separator and their property name or
/// zero-based index. Array entries follow the shape of `data`, so the tree
/// must be rebuilt whenever elements are added or removed. Pure: the same
/// schema and data always yield the same identifiers, which widget identity
/// and event binding rely on across re-renders.
pub fn to_id_schema(
    schema: &Schema,
    parent_id: Option<&str>,
    definitions: &Definitions,
    data: Option<&Value>,
) -> Result<IdSchema> {
    build_node(
        schema,
        parent_id.unwrap_or(ROOT_ID).to_string(),
        definitions,
        data,
        0,
    )
}

fn build_node(
    schema: &Schema,
    id: String,
    definitions: &Definitions,
    data: Option<&Value>,
    depth: usize,
) -> Result<IdSchema> {
    let schema = resolve_ref(schema, definitions)?;
    let mut node = IdSchema::leaf(id);
    if depth >= MAX_SCHEMA_DEPTH {
        return Ok(node);
    }
    match schema.schema_type {
        Some(SchemaType::Object) => {
            if let Some(properties) = &schema.properties {
                let data_map = data.and_then(Value::as_object);
                for (name, child) in properties {
                    let child_data = data_map.and_then(|map| map.get(name));
                    let child = build_node(
                        child,
                        child_id(&node.id, name),
                        definitions,
                        child_data,
                        depth + 1,
                    )?;
                    node.properties.insert(name.clone(), child);
                }
            }
        }
        Some(SchemaType::Array) => {
            if let (Some(item_schema), Some(elements)) = (&schema.items, data.and_then(Value::as_array))
            {
                for (index, element) in elements.iter().enumerate() {
                    node.items.push(build_node(
                        item_schema,
                        child_id(&node.id, &index.to_string()),
                        definitions,
                        Some(element),
                        depth + 1,
                    )?);
                }
            }
        }
        _ => {}
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemaform_model::SchemaDocument;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn document(value: Value) -> SchemaDocument {
        SchemaDocument::from_value(value).expect("parse document")
    }

    #[test]
    fn root_defaults_and_children_join() {
        let doc = document(json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "pins": {"type": "array", "items": {"type": "integer"}},
            },
        }));
        let data = json!({"pins": [4, 18]});
        let ids = to_id_schema(&doc.root, None, &doc.definitions, Some(&data))
            .expect("build id schema");

        assert_eq!(ids.id, "root");
        assert_eq!(ids.properties.get("name").expect("name id").id, "root_name");
        let pins = ids.properties.get("pins").expect("pins id");
        assert_eq!(pins.id, "root_pins");
        assert_eq!(pins.items[0].id, "root_pins_0");
        assert_eq!(pins.items[1].id, "root_pins_1");
    }

    #[test]
    fn custom_parent_id_prefixes_tree() {
        let doc = document(json!({
            "type": "object",
            "properties": {"on": {"type": "boolean"}},
        }));
        let ids = to_id_schema(&doc.root, Some("settings"), &doc.definitions, None)
            .expect("build id schema");
        assert_eq!(ids.id, "settings");
        assert_eq!(ids.properties.get("on").expect("on id").id, "settings_on");
    }

    #[test]
    fn identifiers_are_unique() {
        let doc = document(json!({
            "type": "object",
            "properties": {
                "adapter": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string"},
                        "pins": {"type": "array", "items": {
                            "type": "object",
                            "properties": {"pin": {"type": "integer"}},
                        }},
                    },
                },
                "name": {"type": "string"},
            },
        }));
        let data = json!({"adapter": {"pins": [{"pin": 4}, {"pin": 18}]}});
        let ids = to_id_schema(&doc.root, None, &doc.definitions, Some(&data))
            .expect("build id schema");
        let all = ids.all_ids();
        let unique: BTreeSet<&str> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn rebuilding_yields_identical_tree() {
        let doc = document(json!({
            "type": "object",
            "properties": {"pins": {"type": "array", "items": {"type": "integer"}}},
        }));
        let data = json!({"pins": [4, 18, 21]});
        let first = to_id_schema(&doc.root, None, &doc.definitions, Some(&data))
            .expect("first build");
        let second = to_id_schema(&doc.root, None, &doc.definitions, Some(&data))
            .expect("second build");
        assert_eq!(first, second);
    }
}
