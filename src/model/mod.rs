pub mod dialog;
pub mod document;
pub mod entry;
