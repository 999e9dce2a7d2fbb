//! Property tests for default-state derivation and identifier trees.

use proptest::prelude::*;
use serde_json::json;

use schemaform_engine::{derive_default_state, to_id_schema};
use schemaform_model::SchemaDocument;

fn adapter_document() -> SchemaDocument {
    SchemaDocument::from_value(json!({
        "type": "object",
        "properties": {
            "name": {"type": "string", "default": "gpio"},
            "enabled": {"type": "boolean"},
            "pins": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "pin": {"type": "integer"},
                        "direction": {"type": "string", "default": "in"},
                    },
                },
            },
        },
    }))
    .expect("parse document")
}

proptest! {
    #[test]
    fn derivation_is_idempotent(
        name in "[a-zA-Z0-9 ]{0,12}",
        pins in prop::collection::vec(0u8..64, 0..8),
        enabled in any::<bool>(),
    ) {
        let doc = adapter_document();
        let existing = json!({
            "name": name,
            "enabled": enabled,
            "pins": pins.iter().map(|pin| json!({"pin": pin})).collect::<Vec<_>>(),
        });
        let once = derive_default_state(&doc.root, Some(&existing), &doc.definitions)
            .expect("first derivation");
        let twice = derive_default_state(&doc.root, Some(&once), &doc.definitions)
            .expect("second derivation");
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn identifiers_stay_unique_for_any_element_count(count in 0usize..24) {
        let doc = adapter_document();
        let data = json!({
            "pins": (0..count).map(|pin| json!({"pin": pin})).collect::<Vec<_>>(),
        });
        let ids = to_id_schema(&doc.root, None, &doc.definitions, Some(&data))
            .expect("build id schema");
        let all = ids.all_ids();
        let mut deduped = all.clone();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(all.len(), deduped.len());
    }

    #[test]
    fn id_trees_are_stable_across_rebuilds(count in 0usize..24) {
        let doc = adapter_document();
        let data = json!({
            "pins": (0..count).map(|pin| json!({"pin": pin})).collect::<Vec<_>>(),
        });
        let first = to_id_schema(&doc.root, None, &doc.definitions, Some(&data))
            .expect("first build");
        let second = to_id_schema(&doc.root, None, &doc.definitions, Some(&data))
            .expect("second build");
        prop_assert_eq!(first, second);
    }
}
