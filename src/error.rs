use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("file is not valid UTF-8")]
    InvalidEncoding,

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON object at the top level")]
    NotAnObject,

    #[error("\"{key}\" must be an object with a string defaultMessage")]
    InvalidRecord { key: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("download dialog is not open")]
    DialogNotOpen,
}
