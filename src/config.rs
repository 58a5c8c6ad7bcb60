use std::path::PathBuf;

pub const DEFAULT_EXPORT_NAME: &str = "translations";

const EXPORT_DIR_VAR: &str = "MESSAGES_EDITOR_EXPORT_DIR";
const DEFAULT_NAME_VAR: &str = "MESSAGES_EDITOR_DEFAULT_NAME";

#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// When set, confirmed downloads are also written here.
    pub export_dir: Option<PathBuf>,

    /// Proposed download name when no file has been loaded.
    pub default_export_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            export_dir: None,
            default_export_name: DEFAULT_EXPORT_NAME.to_string(),
        }
    }
}

impl EditorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(dir) = lookup(EXPORT_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            cfg.export_dir = Some(PathBuf::from(dir));
        }

        if let Some(name) = lookup(DEFAULT_NAME_VAR) {
            let name = name.trim();
            if !name.is_empty() {
                cfg.default_export_name = name.to_string();
            }
        }

        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        let cfg = EditorConfig::from_lookup(|_| None);
        assert!(cfg.export_dir.is_none());
        assert_eq!(cfg.default_export_name, "translations");
    }

    #[test]
    fn reads_overrides() {
        let cfg = EditorConfig::from_lookup(|name| match name {
            EXPORT_DIR_VAR => Some("/tmp/out".into()),
            DEFAULT_NAME_VAR => Some("  messages ".into()),
            _ => None,
        });
        assert_eq!(cfg.export_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(cfg.default_export_name, "messages");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = EditorConfig::from_lookup(|_| Some("   ".into()));
        assert!(cfg.export_dir.is_none());
        assert_eq!(cfg.default_export_name, "translations");
    }
}
