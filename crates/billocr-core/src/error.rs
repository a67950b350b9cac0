//! Error types for the billocr-core library.
//!
//! Only the plumbing around the pipeline can fail: loading a document or a
//! configuration file. Extraction itself is total — unparseable numbers
//! degrade to `None` and unmatched lines degrade to buffered name text.

use thiserror::Error;

/// Main error type for the billocr library.
#[derive(Error, Debug)]
pub enum BillocrError {
    /// Document acquisition error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to acquiring page text for a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The referenced document does not exist.
    #[error("document not found: {0}")]
    NotFound(String),

    /// The document was read but produced no page text.
    #[error("document has no pages")]
    NoPages,

    /// Failed to read the document contents.
    #[error("failed to read document: {0}")]
    Read(String),
}

/// Result type for the billocr library.
pub type Result<T> = std::result::Result<T, BillocrError>;
