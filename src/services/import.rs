use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::EditorError;
use crate::model::document::Document;
use crate::parsers::messages;

/// Loads uploaded file content into the document.
///
/// The content is fully decoded and validated before anything is replaced,
/// so a failed import leaves the current document exactly as it was.
pub fn import_content(doc: &mut Document, file_name: &str, bytes: &[u8]) -> Result<(), EditorError> {
    let parsed = match messages::decode(bytes).and_then(|text| messages::parse(&text)) {
        Ok(v) => v,
        Err(e) => {
            warn!(file = file_name, error = %e, "rejected messages file");
            return Err(e);
        }
    };

    info!(file = file_name, entries = parsed.len(), "loaded messages file");
    doc.replace(file_name.to_string(), parsed);
    Ok(())
}

pub fn import_file(doc: &mut Document, path: &Path) -> Result<(), EditorError> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read messages file");
            return Err(e.into());
        }
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    import_content(doc, &file_name, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{key_value_pairs, message_pairs, source_text};
    use proptest::prelude::*;
    use std::io::Write;

    #[test]
    fn imports_greeting() {
        let mut doc = Document::new();
        import_content(&mut doc, "en.json", br#"{"greeting": {"defaultMessage": "Hello"}}"#).unwrap();

        assert_eq!(doc.entries().len(), 1);
        let e = &doc.entries()[0];
        assert_eq!(e.key, "greeting");
        assert_eq!(e.value, "Hello");
        assert!(!doc.is_new(e));
        assert!(!doc.is_modified(e));
        assert_eq!(doc.file_name(), Some("en.json"));
    }

    #[test]
    fn failed_import_keeps_previous_document() {
        let mut doc = Document::new();
        import_content(&mut doc, "en.json", br#"{"greeting": {"defaultMessage": "Hello"}}"#).unwrap();
        doc.set_value("greeting", "Hola");
        let id = doc.add_row();

        let bad_files: [&[u8]; 4] = [
            b"not json",
            br#"["a"]"#,
            br#"{"x": {"defaultMessage": 1}}"#,
            b"\xFF\xFE",
        ];
        for bad in bad_files {
            assert!(import_content(&mut doc, "broken.json", bad).is_err());
        }

        assert_eq!(doc.file_name(), Some("en.json"));
        assert_eq!(doc.entries().len(), 2);
        assert_eq!(doc.entries()[0].value, "Hola");
        assert_eq!(doc.entries()[1].id, id);
        assert!(doc.original().contains("greeting"));
    }

    #[test]
    fn imports_from_path_using_its_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fr.json");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(br#"{"a": {"defaultMessage": "Un"}, "b": {"defaultMessage": "Deux"}}"#)
            .unwrap();

        let mut doc = Document::new();
        import_file(&mut doc, &path).unwrap();

        assert_eq!(doc.file_name(), Some("fr.json"));
        let keys: Vec<_> = doc.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn missing_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = Document::new();
        let res = import_file(&mut doc, &dir.path().join("nope.json"));
        assert!(matches!(res, Err(EditorError::Io(_))));
        assert!(doc.file_name().is_none());
    }

    proptest! {
        #[test]
        fn imports_every_pair_in_source_order(pairs in message_pairs()) {
            let mut doc = Document::new();
            import_content(&mut doc, "any.json", source_text(&pairs).as_bytes()).unwrap();

            prop_assert_eq!(key_value_pairs(&doc), pairs);
            for e in doc.entries() {
                prop_assert_eq!(&e.id, &e.key);
                prop_assert!(!doc.is_new(e));
                prop_assert!(!doc.is_modified(e));
            }
        }
    }
}
