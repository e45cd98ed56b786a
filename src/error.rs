//! Error types for the renredact library.

use std::io;
use thiserror::Error;

/// Result type alias for redaction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while redacting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the source or writing redacted output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Uploading the source document to the rendition backend failed.
    #[error("Upload failed: {0}")]
    Upload(String),

    /// Fetching a document layout (top-level or referenced) failed.
    #[error("Layout resolution failed: {0}")]
    Resolution(String),

    /// A reference chain led back to an already-visited document.
    #[error("Cyclic document reference: {0}")]
    CyclicReference(String),

    /// The backend search operation failed for a page.
    #[error("Search failed on page {page}: {message}")]
    Search { page: u32, message: String },

    /// A text range does not fit the text layout it points into.
    #[error("Text range {start}..{end} is out of bounds (layout has {len} characters)")]
    InvalidRange { start: u32, end: u32, len: u32 },

    /// The alter-content request was rejected by the backend.
    #[error("Alter-content failed: {0}")]
    AlterContent(String),

    /// Fetching the altered document's content failed.
    #[error("Content retrieval failed: {0}")]
    Retrieval(String),

    /// HTTP transport error talking to the rendition backend.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidRange {
            start: 4,
            end: 12,
            len: 8,
        };
        assert_eq!(
            err.to_string(),
            "Text range 4..12 is out of bounds (layout has 8 characters)"
        );

        let err = Error::CyclicReference("doc-1".to_string());
        assert_eq!(err.to_string(), "Cyclic document reference: doc-1");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
