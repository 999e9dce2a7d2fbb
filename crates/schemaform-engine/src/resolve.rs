//! `$ref` resolution against a document's `definitions` mapping.

use std::collections::BTreeSet;

use schemaform_model::{Definitions, Result, Schema, SchemaDocument, SchemaError};

const DEFINITIONS_POINTER: &str = "#/definitions/";

/// Strip the JSON-pointer prefix from a `$ref` value, accepting both
/// `#/definitions/name` and bare `name` forms.
pub fn definition_name(reference: &str) -> &str {
    reference
        .strip_prefix(DEFINITIONS_POINTER)
        .unwrap_or(reference)
}

/// Dereference `$ref` chains until a concrete schema is reached.
///
/// Resolution is transitive; a visited set detects reference cycles so a
/// miswired document fails with [`SchemaError::CyclicRef`] instead of
/// recursing forever. The original document is never mutated.
pub fn resolve_ref<'a>(schema: &'a Schema, definitions: &'a Definitions) -> Result<&'a Schema> {
    let mut current = schema;
    let mut visited = BTreeSet::new();
    while let Some(reference) = current.reference.as_deref() {
        let name = definition_name(reference);
        if !visited.insert(name.to_string()) {
            return Err(SchemaError::CyclicRef(name.to_string()));
        }
        current = definitions
            .get(name)
            .ok_or_else(|| SchemaError::UnresolvedRef(name.to_string()))?;
    }
    Ok(current)
}

/// Walk an entire document and fail fast on any unresolvable or cyclic
/// `$ref`. Called once at form construction so reference mistakes surface
/// at schema-load time rather than mid-edit.
pub fn check_document(document: &SchemaDocument) -> Result<()> {
    check_schema(&document.root, &document.definitions)?;
    for definition in document.definitions.values() {
        check_schema(definition, &document.definitions)?;
    }
    Ok(())
}

fn check_schema(schema: &Schema, definitions: &Definitions) -> Result<()> {
    resolve_ref(schema, definitions)?;
    if let Some(properties) = &schema.properties {
        for child in properties.values() {
            check_schema(child, definitions)?;
        }
    }
    if let Some(items) = &schema.items {
        check_schema(items, definitions)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemaform_model::SchemaType;
    use serde_json::json;

    fn document(value: serde_json::Value) -> SchemaDocument {
        SchemaDocument::from_value(value).expect("parse document")
    }

    #[test]
    fn resolves_pointer_and_bare_references() {
        let doc = document(json!({
            "type": "object",
            "properties": {
                "a": {"$ref": "#/definitions/level"},
                "b": {"$ref": "level"},
            },
            "definitions": {"level": {"type": "number"}},
        }));
        let properties = doc.root.properties.as_ref().expect("properties");
        for child in properties.values() {
            let resolved = resolve_ref(child, &doc.definitions).expect("resolve");
            assert_eq!(resolved.schema_type, Some(SchemaType::Number));
        }
    }

    #[test]
    fn resolves_transitively() {
        let doc = document(json!({
            "$ref": "#/definitions/outer",
            "definitions": {
                "outer": {"$ref": "#/definitions/inner"},
                "inner": {"type": "boolean"},
            },
        }));
        let resolved = resolve_ref(&doc.root, &doc.definitions).expect("resolve");
        assert_eq!(resolved.schema_type, Some(SchemaType::Boolean));
    }

    #[test]
    fn missing_definition_fails() {
        let doc = document(json!({"$ref": "#/definitions/ghost"}));
        let error = resolve_ref(&doc.root, &doc.definitions).expect_err("unresolved ref");
        assert!(matches!(error, SchemaError::UnresolvedRef(name) if name == "ghost"));
    }

    #[test]
    fn reference_cycle_fails() {
        let doc = document(json!({
            "$ref": "#/definitions/a",
            "definitions": {
                "a": {"$ref": "#/definitions/b"},
                "b": {"$ref": "#/definitions/a"},
            },
        }));
        let error = resolve_ref(&doc.root, &doc.definitions).expect_err("cyclic ref");
        assert!(matches!(error, SchemaError::CyclicRef(_)));
    }

    #[test]
    fn check_document_covers_nested_references() {
        let doc = document(json!({
            "type": "object",
            "properties": {
                "outer": {
                    "type": "array",
                    "items": {"$ref": "#/definitions/ghost"},
                },
            },
        }));
        assert!(check_document(&doc).is_err());

        let ok = document(json!({
            "type": "object",
            "properties": {"level": {"$ref": "#/definitions/percent"}},
            "definitions": {"percent": {"type": "number"}},
        }));
        assert!(check_document(&ok).is_ok());
    }
}
