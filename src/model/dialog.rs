use serde::Serialize;

use crate::error::EditorError;

/// Filename prompt shown before a download.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DownloadDialog {
    #[default]
    Closed,
    Open {
        proposed_name: String,
    },
}

impl DownloadDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, DownloadDialog::Open { .. })
    }

    /// Opens (or re-prefills) the prompt.
    pub fn open(&mut self, proposed_name: String) {
        *self = DownloadDialog::Open { proposed_name };
    }

    pub fn cancel(&mut self) -> Result<(), EditorError> {
        if !self.is_open() {
            return Err(EditorError::DialogNotOpen);
        }
        *self = DownloadDialog::Closed;
        Ok(())
    }

    /// Closes the prompt and hands back the prefilled name.
    pub fn confirm(&mut self) -> Result<String, EditorError> {
        match std::mem::take(self) {
            DownloadDialog::Open { proposed_name } => Ok(proposed_name),
            DownloadDialog::Closed => Err(EditorError::DialogNotOpen),
        }
    }
}
