#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    DocumentImport,
    DocumentState,
    EntrySetKey,
    EntrySetValue,
    EntryClearValue,
    EntriesClearValues,
    EntryAdd,
    ExportPreview,
    DownloadOpen,
    DownloadCancel,
    DownloadConfirm,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "document.import" => Command::DocumentImport,
            "document.state" => Command::DocumentState,
            "entry.set_key" => Command::EntrySetKey,
            "entry.set_value" => Command::EntrySetValue,
            "entry.clear_value" => Command::EntryClearValue,
            "entries.clear_values" => Command::EntriesClearValues,
            "entry.add" => Command::EntryAdd,
            "export.preview" => Command::ExportPreview,
            "download.open" => Command::DownloadOpen,
            "download.cancel" => Command::DownloadCancel,
            "download.confirm" => Command::DownloadConfirm,
            _ => Command::Unknown,
        }
    }
}
