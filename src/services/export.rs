use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{info, warn};

use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::model::dialog::DownloadDialog;
use crate::model::document::Document;
use crate::model::entry::Entry;

const EXTENSION: &str = ".json";

#[derive(Debug, Serialize)]
pub struct Download {
    pub file_name: String,
    pub content: String,
    pub path: Option<PathBuf>,
    pub duplicate_keys: Vec<String>,
}

/// Loaded rows always export (even with a cleared value); new rows only
/// once both key and value hold something.
pub fn export_set(doc: &Document) -> Vec<&Entry> {
    doc.entries()
        .iter()
        .filter(|e| !doc.is_new(e) || e.is_complete())
        .collect()
}

/// Builds the output object. A repeated key keeps its first position and the
/// last value; every repeated key is listed once in the second element.
pub fn build(doc: &Document) -> (Map<String, Value>, Vec<String>) {
    let mut out = Map::new();
    let mut duplicate_keys: Vec<String> = Vec::new();

    for e in export_set(doc) {
        let previous = out.insert(e.key.clone(), json!({ "defaultMessage": e.value }));
        if previous.is_some() && !duplicate_keys.contains(&e.key) {
            duplicate_keys.push(e.key.clone());
        }
    }

    (out, duplicate_keys)
}

/// Output text with 2-space indentation, plus any repeated keys.
pub fn render(doc: &Document) -> (String, Vec<String>) {
    let (map, duplicate_keys) = build(doc);
    (format!("{:#}", Value::Object(map)), duplicate_keys)
}

pub fn base_name(name: &str) -> &str {
    name.strip_suffix(EXTENSION).unwrap_or(name)
}

pub fn file_name_for(chosen: &str, fallback: &str) -> String {
    let base = base_name(chosen.trim());
    let base = if base.is_empty() { fallback } else { base };
    format!("{base}{EXTENSION}")
}

pub fn proposed_name(doc: &Document, cfg: &EditorConfig) -> String {
    match doc.file_name() {
        Some(name) => base_name(name).to_string(),
        None => cfg.default_export_name.clone(),
    }
}

/// Opens the filename prompt prefilled with the proposed name.
pub fn open_download(doc: &mut Document, cfg: &EditorConfig) -> String {
    let proposed = proposed_name(doc, cfg);
    doc.dialog_mut().open(proposed.clone());
    proposed
}

/// Produces the download for the chosen name (or the prefilled one) and
/// closes the prompt. Entries and the snapshot are left untouched. If
/// writing to the export directory fails the prompt stays open.
pub fn confirm_download(
    doc: &mut Document,
    cfg: &EditorConfig,
    chosen: Option<&str>,
) -> Result<Download, EditorError> {
    let proposed = match doc.dialog() {
        DownloadDialog::Open { proposed_name } => proposed_name.clone(),
        DownloadDialog::Closed => return Err(EditorError::DialogNotOpen),
    };

    let mut file_name = file_name_for(chosen.unwrap_or(&proposed), &cfg.default_export_name);
    let (content, duplicate_keys) = render(doc);

    if !duplicate_keys.is_empty() {
        warn!(keys = ?duplicate_keys, "duplicate keys in export, later rows win");
    }

    // Report the name actually used on disk.
    let path = match &cfg.export_dir {
        Some(dir) => {
            let path = save_to_host(dir, &file_name, content.as_bytes())?;
            if let Some(written) = path.file_name().and_then(|s| s.to_str()) {
                file_name = written.to_string();
            }
            Some(path)
        }
        None => None,
    };

    doc.dialog_mut().confirm()?;
    info!(file = %file_name, bytes = content.len(), "exported messages file");

    Ok(Download {
        file_name,
        content,
        path,
        duplicate_keys,
    })
}

fn unsafe_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[<>:"/\\|?*\x00-\x1F]"#).expect("static pattern"))
}

/// Reduces a user-typed name to a bare file name that is safe on disk.
fn safe_file_name(name: &str) -> String {
    let bare = Path::new(name)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(name);

    let cleaned = unsafe_chars().replace_all(bare, "_");
    let cleaned = cleaned.trim();

    if base_name(cleaned).trim_matches('.').is_empty() {
        format!("download{EXTENSION}")
    } else {
        cleaned.trim_start_matches('.').to_string()
    }
}

/// Writes the bytes into `dir` under a sanitized name and returns the path.
pub fn save_to_host(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, EditorError> {
    let path = dir.join(safe_file_name(file_name));
    write_atomic(&path, bytes)?;
    Ok(path)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), EditorError> {
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&tmp, bytes)?;

    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&tmp, path)?;

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "export".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}
