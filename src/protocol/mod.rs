use std::path::Path;

use serde_json::{json, Value};
use tracing::debug;

use crate::config::EditorConfig;
use crate::model::document::Document;
use crate::services::{export, import};

mod command;
use command::Command;

/// Everything one editor window owns: its document and the settings it runs with.
#[derive(Debug, Default)]
pub struct Session {
    pub config: EditorConfig,
    pub document: Document,
}

impl Session {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            document: Document::new(),
        }
    }
}

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload(req: &Value) -> &Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn get_str<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload.get(field).and_then(|v| v.as_str())
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

fn state(session: &Session) -> Value {
    let doc = &session.document;
    json!({
        "file_name": doc.file_name(),
        "entries": doc.views(),
        "summary": doc.summary(),
        "dialog": doc.dialog(),
    })
}

fn edited(session: &Session, updated: bool) -> Value {
    json!({
        "updated": updated,
        "summary": session.document.summary(),
    })
}

pub fn handle(session: &mut Session, input: &str) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let cmd_str = get_cmd(&req);
    let payload = get_payload(&req);

    debug!(cmd = cmd_str, "handling request");

    match Command::from(cmd_str) {
        Command::Ping => ok(id, json!({ "message": "messages-core alive" })),

        Command::DocumentImport => {
            let result = match get_str(payload, "path").filter(|p| !p.is_empty()) {
                Some(path) => import::import_file(&mut session.document, Path::new(path)),
                None => {
                    let Some(content) = get_str(payload, "content") else {
                        return err(id, "payload.content or payload.path is required");
                    };
                    let file_name = get_str(payload, "file_name").unwrap_or("untitled.json");
                    import::import_content(&mut session.document, file_name, content.as_bytes())
                }
            };

            match result {
                Ok(()) => ok(id, state(session)),
                Err(e) => err(id, format!("could not load file: {e}")),
            }
        }

        Command::DocumentState => ok(id, state(session)),

        Command::EntrySetKey => {
            let Some(entry_id) = get_str(payload, "id") else {
                return err(id, "payload.id is required");
            };
            let key = get_str(payload, "key").unwrap_or("");
            let updated = session.document.set_key(entry_id, key);
            ok(id, edited(session, updated))
        }

        Command::EntrySetValue => {
            let Some(entry_id) = get_str(payload, "id") else {
                return err(id, "payload.id is required");
            };
            let value = get_str(payload, "value").unwrap_or("");
            let updated = session.document.set_value(entry_id, value);
            ok(id, edited(session, updated))
        }

        Command::EntryClearValue => {
            let Some(entry_id) = get_str(payload, "id") else {
                return err(id, "payload.id is required");
            };
            let updated = session.document.clear_value(entry_id);
            ok(id, edited(session, updated))
        }

        Command::EntriesClearValues => {
            let cleared = session.document.clear_all_values();
            ok(
                id,
                json!({ "cleared": cleared, "summary": session.document.summary() }),
            )
        }

        Command::EntryAdd => {
            let new_id = session.document.add_row();
            // "reveal" asks the table to scroll the new row into view.
            ok(id, json!({ "id": new_id, "reveal": new_id }))
        }

        Command::ExportPreview => {
            let (content, duplicate_keys) = export::render(&session.document);
            ok(
                id,
                json!({ "content": content, "duplicate_keys": duplicate_keys }),
            )
        }

        Command::DownloadOpen => {
            let proposed = export::open_download(&mut session.document, &session.config);
            ok(id, json!({ "proposed_name": proposed }))
        }

        Command::DownloadCancel => match session.document.dialog_mut().cancel() {
            Ok(()) => ok(id, json!({ "dialog": session.document.dialog() })),
            Err(e) => err(id, e.to_string()),
        },

        Command::DownloadConfirm => {
            let chosen = get_str(payload, "file_name");
            match export::confirm_download(&mut session.document, &session.config, chosen) {
                Ok(download) => ok(id, json!(download)),
                Err(e) => err(id, e.to_string()),
            }
        }

        Command::Unknown => err(id, "unknown command"),
    }
}
