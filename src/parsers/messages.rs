use std::borrow::Cow;

use encoding_rs::UTF_8;
use serde_json::Value;

use crate::error::EditorError;
use crate::model::entry::MessageDescriptor;

/// Decodes an uploaded file as UTF-8, dropping a leading BOM if present.
pub fn decode(bytes: &[u8]) -> Result<Cow<'_, str>, EditorError> {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(EditorError::InvalidEncoding);
    }
    Ok(text)
}

/// Parses `{ "<key>": { "defaultMessage": "<text>" }, ... }` keeping the
/// property order of the source.
pub fn parse(text: &str) -> Result<Vec<(String, MessageDescriptor)>, EditorError> {
    let map = match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => map,
        _ => return Err(EditorError::NotAnObject),
    };

    let mut messages = Vec::with_capacity(map.len());

    for (key, v) in map {
        // Extra fields (e.g. "description") are allowed and dropped.
        let m = serde_json::from_value::<MessageDescriptor>(v)
            .map_err(|_| EditorError::InvalidRecord { key: key.clone() })?;
        messages.push((key, m));
    }

    Ok(messages)
}
