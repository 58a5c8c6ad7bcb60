use std::collections::HashMap;

use rand::{thread_rng, Rng};
use serde::Serialize;

use crate::model::dialog::DownloadDialog;
use crate::model::entry::{Entry, EntryView, MessageDescriptor};

/// The file as it was loaded. Only replaced wholesale by an import.
#[derive(Debug, Clone, Default)]
pub struct OriginalSnapshot {
    messages: HashMap<String, MessageDescriptor>,
}

impl OriginalSnapshot {
    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&MessageDescriptor> {
        self.messages.get(key)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub new: usize,
    pub modified: usize,
}

/// The single document shown by the editor.
///
/// Rows are only ever appended; clearing a value never removes its row.
#[derive(Debug, Default)]
pub struct Document {
    file_name: Option<String>,
    original: OriginalSnapshot,
    entries: Vec<Entry>,
    dialog: DownloadDialog,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn original(&self) -> &OriginalSnapshot {
        &self.original
    }

    pub fn dialog(&self) -> &DownloadDialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut DownloadDialog {
        &mut self.dialog
    }

    /// Swaps in a freshly loaded file. Row ids are the source keys.
    pub fn replace(&mut self, file_name: String, messages: Vec<(String, MessageDescriptor)>) {
        self.entries = messages
            .iter()
            .map(|(key, m)| Entry {
                id: key.clone(),
                key: key.clone(),
                value: m.default_message.clone(),
            })
            .collect();
        self.original = OriginalSnapshot {
            messages: messages.into_iter().collect(),
        };
        self.file_name = Some(file_name);
    }

    fn entry_mut(&mut self, id: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn set_key(&mut self, id: &str, key: impl Into<String>) -> bool {
        match self.entry_mut(id) {
            Some(e) => {
                e.key = key.into();
                true
            }
            None => false,
        }
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.entry_mut(id) {
            Some(e) => {
                e.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn clear_value(&mut self, id: &str) -> bool {
        self.set_value(id, String::new())
    }

    /// Empties every non-empty value and returns how many were cleared.
    pub fn clear_all_values(&mut self) -> usize {
        let mut cleared = 0usize;
        for e in self.entries.iter_mut().filter(|e| !e.value.is_empty()) {
            e.value.clear();
            cleared += 1;
        }
        cleared
    }

    /// Appends a blank row and returns its id.
    pub fn add_row(&mut self) -> String {
        let id = self.fresh_id();
        self.entries.push(Entry::blank(id.clone()));
        id
    }

    // Snapshot keys are reserved too, otherwise a new row could look loaded.
    fn fresh_id(&self) -> String {
        let mut rng = thread_rng();
        loop {
            let id = format!("new-{:08x}", rng.gen::<u32>());
            if !self.original.contains(&id) && !self.entries.iter().any(|e| e.id == id) {
                return id;
            }
        }
    }

    pub fn is_new(&self, entry: &Entry) -> bool {
        !self.original.contains(&entry.id)
    }

    /// A loaded row counts as modified once its key or its value differs
    /// from what was loaded (its id is the loaded key).
    pub fn is_modified(&self, entry: &Entry) -> bool {
        match self.original.get(&entry.id) {
            Some(m) => entry.key != entry.id || m.default_message != entry.value,
            None => true,
        }
    }

    pub fn is_empty_new_entry(&self, entry: &Entry) -> bool {
        self.is_new(entry) && !entry.is_complete()
    }

    pub fn views(&self) -> Vec<EntryView> {
        self.entries
            .iter()
            .map(|e| EntryView {
                entry: e.clone(),
                is_new: self.is_new(e),
                is_modified: self.is_modified(e),
                is_empty_new: self.is_empty_new_entry(e),
            })
            .collect()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total: self.entries.len(),
            new: self.entries.iter().filter(|e| self.is_new(e)).count(),
            modified: self.entries.iter().filter(|e| self.is_modified(e)).count(),
        }
    }
}
