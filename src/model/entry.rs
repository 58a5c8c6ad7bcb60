use serde::{Deserialize, Serialize};

/// Value side of one property in a messages file: `{ "defaultMessage": "..." }`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MessageDescriptor {
    #[serde(rename = "defaultMessage")]
    pub default_message: String,
}

impl MessageDescriptor {
    #[cfg(test)]
    pub fn new(default_message: impl Into<String>) -> Self {
        Self {
            default_message: default_message.into(),
        }
    }
}

/// One editable row. `id` is fixed at creation, `key` is free text.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn blank(id: String) -> Self {
        Self {
            id,
            key: String::new(),
            value: String::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.key.trim().is_empty() && !self.value.trim().is_empty()
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct EntryView {
    #[serde(flatten)]
    pub entry: Entry,

    pub is_new: bool,
    pub is_modified: bool,
    pub is_empty_new: bool,
}
