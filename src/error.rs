//! Error types for canonsort
//!
//! Fatal errors abort a run and surface through `CanonsortError`. Per-document
//! failures are `ExtractionError`s: the walker records them and moves on.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for canonsort operations
pub type CanonsortResult<T> = Result<T, CanonsortError>;

/// Fatal errors for a canonsort run
#[derive(Error, Debug)]
pub enum CanonsortError {
    /// Canon registry missing or malformed
    #[error("canon registry {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Corpus root does not exist or is not a directory
    #[error("corpus root not found: {path}")]
    CorpusNotFound { path: PathBuf },

    /// Report could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report could not be serialized
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error
    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Why a single document was skipped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// File could not be read
    #[error("unreadable: {message}")]
    Unreadable { message: String },

    /// Markup is not well-formed XML
    #[error("XML parsing error: {message}")]
    Malformed { message: String },

    /// Well-formed XML whose root is not a TEI element
    #[error("root element <{root}> is not TEI")]
    NotTei { root: String },
}
