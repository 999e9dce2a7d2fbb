//! The recursive field tree handed to the host for rendering.

use serde::Serialize;
use serde_json::Value;

use schemaform_model::{
    Definitions, FieldPath, IdSchema, MAX_SCHEMA_DEPTH, Result, Schema, SchemaType, child_id,
};

use schemaform_engine::resolve_ref;

/// Field variant instantiated for a schema node.
///
/// A closed set: adding a type means extending every match below, checked at
/// compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Object,
    Array,
    Enumerated,
    Boolean,
    Number,
    String,
}

impl FieldKind {
    /// Dispatch on the declared type. `enum` on a string or numeric schema
    /// overrides to `Enumerated`; a missing or unsupported `type` falls back
    /// to an unconstrained text field.
    pub fn for_schema(schema: &Schema) -> FieldKind {
        if schema.enum_values.is_some()
            && matches!(
                schema.schema_type,
                None | Some(SchemaType::String)
                    | Some(SchemaType::Number)
                    | Some(SchemaType::Integer)
            )
        {
            return FieldKind::Enumerated;
        }
        match schema.schema_type {
            Some(SchemaType::Object) => FieldKind::Object,
            Some(SchemaType::Array) => FieldKind::Array,
            Some(SchemaType::Boolean) => FieldKind::Boolean,
            Some(SchemaType::Number) | Some(SchemaType::Integer) => FieldKind::Number,
            Some(SchemaType::String) => FieldKind::String,
            None => {
                tracing::debug!("schema without a usable type rendered as text");
                FieldKind::String
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Object => "object",
            FieldKind::Array => "array",
            FieldKind::Enumerated => "enumerated",
            FieldKind::Boolean => "boolean",
            FieldKind::Number => "number",
            FieldKind::String => "string",
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, FieldKind::Object | FieldKind::Array)
    }
}

/// One node of the render tree.
///
/// Container nodes compose `children` in schema-declaration order (objects)
/// or index order (arrays) and carry `Value::Null`; primitive and enumerated
/// nodes carry their current scalar in `value`. The host renders each node
/// with whatever widget fits `kind` and reports edits back by `path`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldNode {
    /// Stable path-derived identifier from the identifier tree.
    pub id: String,
    /// Property name or decimal index within the parent.
    pub name: String,
    /// Human-facing label: the schema `title`, else the name.
    pub label: String,
    /// Optional help text from the schema `description`.
    pub description: Option<String>,
    pub kind: FieldKind,
    pub path: FieldPath,
    pub value: Value,
    /// Whether the parent object schema lists this field as required.
    pub required: bool,
    /// Allowed members for `Enumerated` fields, in declaration order.
    pub options: Vec<Value>,
    pub children: Vec<FieldNode>,
}

impl FieldNode {
    /// Build the field tree for a schema against the current state.
    pub fn build(
        schema: &Schema,
        state: &Value,
        id_schema: &IdSchema,
        name: &str,
        definitions: &Definitions,
    ) -> Result<FieldNode> {
        build_node(
            schema,
            state,
            id_schema,
            name,
            FieldPath::root(),
            definitions,
            0,
        )
    }

    /// All nodes in depth-first preorder.
    pub fn walk(&self) -> Vec<&FieldNode> {
        let mut nodes = Vec::new();
        self.collect(&mut nodes);
        nodes
    }

    fn collect<'a>(&'a self, nodes: &mut Vec<&'a FieldNode>) {
        nodes.push(self);
        for child in &self.children {
            child.collect(nodes);
        }
    }
}

fn build_node(
    schema: &Schema,
    state: &Value,
    ids: &IdSchema,
    name: &str,
    path: FieldPath,
    definitions: &Definitions,
    depth: usize,
) -> Result<FieldNode> {
    let schema = resolve_ref(schema, definitions)?;
    let kind = FieldKind::for_schema(schema);
    let mut node = FieldNode {
        id: ids.id.clone(),
        name: name.to_string(),
        label: schema.label(name).to_string(),
        description: schema.description.clone(),
        kind,
        path,
        value: Value::Null,
        required: false,
        options: schema.enum_values.clone().unwrap_or_default(),
        children: Vec::new(),
    };
    if depth >= MAX_SCHEMA_DEPTH {
        return Ok(node);
    }
    match kind {
        FieldKind::Object => {
            if let Some(properties) = &schema.properties {
                let state_map = state.as_object();
                for (child_name, child_schema) in properties {
                    let child_state = state_map
                        .and_then(|map| map.get(child_name))
                        .unwrap_or(&Value::Null);
                    let fallback;
                    let child_ids = match ids.properties.get(child_name) {
                        Some(child_ids) => child_ids,
                        None => {
                            fallback = IdSchema::leaf(child_id(&ids.id, child_name));
                            &fallback
                        }
                    };
                    let mut child = build_node(
                        child_schema,
                        child_state,
                        child_ids,
                        child_name,
                        node.path.child(child_name),
                        definitions,
                        depth + 1,
                    )?;
                    child.required = schema.requires(child_name);
                    node.children.push(child);
                }
            }
        }
        FieldKind::Array => {
            if let (Some(item_schema), Some(elements)) = (&schema.items, state.as_array()) {
                for (index, element) in elements.iter().enumerate() {
                    let child_name = index.to_string();
                    let fallback;
                    let child_ids = match ids.items.get(index) {
                        Some(child_ids) => child_ids,
                        None => {
                            fallback = IdSchema::leaf(child_id(&ids.id, &child_name));
                            &fallback
                        }
                    };
                    node.children.push(build_node(
                        item_schema,
                        element,
                        child_ids,
                        &child_name,
                        node.path.element(index),
                        definitions,
                        depth + 1,
                    )?);
                }
            }
        }
        _ => {
            node.value = state.clone();
        }
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemaform_engine::to_id_schema;
    use schemaform_model::SchemaDocument;
    use serde_json::json;

    fn tree(schema: serde_json::Value, state: serde_json::Value) -> FieldNode {
        let doc = SchemaDocument::from_value(schema).expect("parse document");
        let ids = to_id_schema(&doc.root, None, &doc.definitions, Some(&state))
            .expect("build id schema");
        FieldNode::build(&doc.root, &state, &ids, "config", &doc.definitions)
            .expect("build field tree")
    }

    #[test]
    fn dispatch_covers_every_type() {
        let root = tree(
            json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "pin": {"type": "integer"},
                    "level": {"type": "number"},
                    "on": {"type": "boolean"},
                    "mode": {"type": "string", "enum": ["in", "out"]},
                    "tags": {"type": "array", "items": {"type": "string"}},
                },
            }),
            json!({"name": "", "pin": 0, "level": 0.5, "on": false, "mode": "in", "tags": ["a"]}),
        );
        let kinds: Vec<FieldKind> = root.children.iter().map(|child| child.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FieldKind::String,
                FieldKind::Number,
                FieldKind::Number,
                FieldKind::Boolean,
                FieldKind::Enumerated,
                FieldKind::Array,
            ]
        );
    }

    #[test]
    fn enum_overrides_string_and_number_dispatch() {
        let string_schema: Schema =
            serde_json::from_value(json!({"type": "string", "enum": ["a"]})).unwrap();
        let number_schema: Schema =
            serde_json::from_value(json!({"type": "integer", "enum": [1]})).unwrap();
        let boolean_schema: Schema =
            serde_json::from_value(json!({"type": "boolean", "enum": [true]})).unwrap();
        assert_eq!(FieldKind::for_schema(&string_schema), FieldKind::Enumerated);
        assert_eq!(FieldKind::for_schema(&number_schema), FieldKind::Enumerated);
        assert_eq!(FieldKind::for_schema(&boolean_schema), FieldKind::Boolean);
    }

    #[test]
    fn children_carry_identifiers_paths_and_labels() {
        let root = tree(
            json!({
                "type": "object",
                "properties": {
                    "pins": {
                        "title": "GPIO pins",
                        "type": "array",
                        "items": {"type": "integer"},
                    },
                },
                "required": ["pins"],
            }),
            json!({"pins": [4, 18]}),
        );
        assert_eq!(root.id, "root");
        assert_eq!(root.name, "config");
        let pins = &root.children[0];
        assert_eq!(pins.id, "root_pins");
        assert_eq!(pins.label, "GPIO pins");
        assert!(pins.required);
        assert_eq!(pins.children.len(), 2);
        assert_eq!(pins.children[1].id, "root_pins_1");
        assert_eq!(pins.children[1].path.to_string(), "pins.1");
        assert_eq!(pins.children[1].value, json!(18));
    }

    #[test]
    fn walk_visits_preorder() {
        let root = tree(
            json!({
                "type": "object",
                "properties": {
                    "a": {"type": "string"},
                    "b": {"type": "object", "properties": {"c": {"type": "boolean"}}},
                },
            }),
            json!({"a": "", "b": {"c": true}}),
        );
        let ids: Vec<&str> = root.walk().iter().map(|node| node.id.as_str()).collect();
        assert_eq!(ids, vec!["root", "root_a", "root_b", "root_b_c"]);
    }
}
