//! Default form-state derivation.

use serde_json::{Map, Value};

use schemaform_model::{Definitions, MAX_SCHEMA_DEPTH, Result, Schema, SchemaType};

use crate::resolve::resolve_ref;

/// Compute a fully populated form-state tree for a schema.
///
/// Precedence per node, highest first: a type-matching value already present
/// in `existing`, the schema's own `default`, then a type-appropriate empty
/// value. Object keys present in `existing` but not declared in the schema
/// pass through untouched. The derivation is deterministic and idempotent:
/// re-deriving from its own output yields an identical tree.
pub fn derive_default_state(
    schema: &Schema,
    existing: Option<&Value>,
    definitions: &Definitions,
) -> Result<Value> {
    derive_node(schema, existing, definitions, 0)
}

fn derive_node(
    schema: &Schema,
    existing: Option<&Value>,
    definitions: &Definitions,
    depth: usize,
) -> Result<Value> {
    let schema = resolve_ref(schema, definitions)?;
    if depth >= MAX_SCHEMA_DEPTH {
        tracing::debug!("derivation depth cap reached, emitting empty value");
        return Ok(empty_value(schema));
    }
    let source = pick_source(schema, existing);
    match schema.schema_type {
        Some(SchemaType::Object) => {
            let source_map = source.and_then(Value::as_object);
            let mut state = Map::new();
            if let Some(properties) = &schema.properties {
                for (name, child) in properties {
                    let child_existing = source_map.and_then(|map| map.get(name));
                    state.insert(
                        name.clone(),
                        derive_node(child, child_existing, definitions, depth + 1)?,
                    );
                }
            }
            if let Some(map) = source_map {
                for (name, value) in map {
                    state
                        .entry(name.clone())
                        .or_insert_with(|| value.clone());
                }
            }
            Ok(Value::Object(state))
        }
        Some(SchemaType::Array) => {
            let mut elements = Vec::new();
            if let Some(source_elements) = source.and_then(Value::as_array) {
                match &schema.items {
                    Some(item_schema) => {
                        for element in source_elements {
                            elements.push(derive_node(
                                item_schema,
                                Some(element),
                                definitions,
                                depth + 1,
                            )?);
                        }
                    }
                    // no items schema: elements pass through unconstrained
                    None => elements.extend(source_elements.iter().cloned()),
                }
            }
            Ok(Value::Array(elements))
        }
        _ => Ok(source.cloned().unwrap_or_else(|| empty_value(schema))),
    }
}

/// Highest-precedence source value whose runtime kind matches the declared
/// type: the existing value first, then the schema default.
fn pick_source<'a>(schema: &'a Schema, existing: Option<&'a Value>) -> Option<&'a Value> {
    existing
        .filter(|value| type_matches(schema, value))
        .or_else(|| {
            schema
                .default
                .as_ref()
                .filter(|value| type_matches(schema, value))
        })
}

fn type_matches(schema: &Schema, value: &Value) -> bool {
    match schema.schema_type {
        Some(declared) => declared.matches_value(value),
        None => true,
    }
}

fn empty_value(schema: &Schema) -> Value {
    match schema.schema_type {
        Some(SchemaType::Object) => Value::Object(Map::new()),
        Some(SchemaType::Array) => Value::Array(Vec::new()),
        Some(SchemaType::String) => Value::String(String::new()),
        Some(SchemaType::Number) | Some(SchemaType::Integer) => Value::from(0),
        Some(SchemaType::Boolean) => Value::Bool(false),
        None => Value::Null,
    }
}
