//! Structural-merge operations on form state.
//!
//! Every edit anywhere in the field tree becomes a whole-tree replacement:
//! the addressed slot is swapped out, the spine down to it is rebuilt, and
//! sibling subtrees are carried over unchanged. The controller only ever
//! holds complete state snapshots, so a render can never observe a torn
//! tree.

use serde_json::Value;

use schemaform_model::{Definitions, FieldPath, PathSegment, Result, Schema};

use schemaform_engine::derive_default_state;

/// Read the node addressed by `path`, if the state has that shape.
pub fn lookup<'a>(state: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    let mut current = state;
    for segment in path.segments() {
        current = match segment {
            PathSegment::Name(name) => current.as_object()?.get(name)?,
            PathSegment::Index(index) => current.as_array()?.get(*index)?,
        };
    }
    Some(current)
}

/// Replace the slot addressed by `path` with `new_value`, producing a new
/// root. Missing intermediate objects are created; an index one past the end
/// of an array appends.
pub fn apply_change(state: &Value, path: &FieldPath, new_value: Value) -> Value {
    apply_segments(state, path.segments(), new_value)
}

fn apply_segments(state: &Value, segments: &[PathSegment], new_value: Value) -> Value {
    let Some((head, rest)) = segments.split_first() else {
        return new_value;
    };
    match head {
        PathSegment::Name(name) => {
            let mut map = state.as_object().cloned().unwrap_or_default();
            let child = map.get(name).cloned().unwrap_or(Value::Null);
            map.insert(name.clone(), apply_segments(&child, rest, new_value));
            Value::Object(map)
        }
        PathSegment::Index(index) => {
            let mut elements = state.as_array().cloned().unwrap_or_default();
            if *index < elements.len() {
                let replaced = apply_segments(&elements[*index], rest, new_value);
                elements[*index] = replaced;
            } else if *index == elements.len() {
                elements.push(apply_segments(&Value::Null, rest, new_value));
            } else {
                tracing::debug!(index, "change past the end of an array ignored");
            }
            Value::Array(elements)
        }
    }
}

/// Append a freshly derived default element to the array at `array_path`.
pub fn append_default_item(
    state: &Value,
    array_path: &FieldPath,
    item_schema: &Schema,
    definitions: &Definitions,
) -> Result<Value> {
    let element = derive_default_state(item_schema, None, definitions)?;
    let mut elements = lookup(state, array_path)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    elements.push(element);
    Ok(apply_change(state, array_path, Value::Array(elements)))
}

/// Remove the element at `index` from the array at `array_path`.
///
/// Identifiers are index-derived, so removal shifts the identifiers of every
/// later sibling; callers must rebuild the identifier tree afterwards and
/// must not cache identifiers across a removal.
pub fn remove_item(state: &Value, array_path: &FieldPath, index: usize) -> Value {
    let mut elements = lookup(state, array_path)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if index < elements.len() {
        elements.remove(index);
    }
    apply_change(state, array_path, Value::Array(elements))
}
