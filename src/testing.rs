//! Shared generators for property tests.

use std::collections::HashSet;

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use crate::model::document::Document;
use crate::model::entry::MessageDescriptor;

/// Keys seen in real files, plus arbitrary unicode and ids shaped like new rows.
pub fn message_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}(\\.[a-zA-Z0-9_]{1,8}){0,3}",
        "\\PC{0,12}",
        "new-[0-9a-f]{8}",
    ]
}

pub fn message_text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "\\PC{0,24}"]
}

/// Key/defaultMessage pairs with unique keys, in generation order.
pub fn message_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((message_key(), message_text()), 0..24).prop_map(|pairs| {
        let mut seen = HashSet::new();
        pairs
            .into_iter()
            .filter(|(k, _)| seen.insert(k.clone()))
            .collect()
    })
}

pub fn source_text(pairs: &[(String, String)]) -> String {
    let mut map = Map::new();
    for (k, v) in pairs {
        map.insert(k.clone(), json!({ "defaultMessage": v }));
    }
    Value::Object(map).to_string()
}

pub fn document_from(pairs: &[(String, String)]) -> Document {
    let mut doc = Document::new();
    doc.replace(
        "messages.json".into(),
        pairs
            .iter()
            .map(|(k, v)| (k.clone(), MessageDescriptor::new(v.as_str())))
            .collect(),
    );
    doc
}

pub fn key_value_pairs(doc: &Document) -> Vec<(String, String)> {
    doc.entries()
        .iter()
        .map(|e| (e.key.clone(), e.value.clone()))
        .collect()
}
