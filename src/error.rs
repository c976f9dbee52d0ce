//! Errors that abort processing of a document.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A close event whose name differs from the innermost open element.
    #[error("mismatched nesting: </{found}> closes <{expected}>")]
    MismatchedClose { expected: String, found: String },

    #[error("mismatched nesting: </{0}> has no open element")]
    UnmatchedClose(String),

    #[error("document ended with <{0}> still open")]
    Unclosed(String),

    #[error("refusing to write `{0}`: not a plain file name")]
    UnsafeFileName(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
