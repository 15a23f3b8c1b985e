//! Error types for the resolution and graph pipeline

use thiserror::Error;
use uuid::Uuid;

/// Errors that can abort a pipeline run
#[derive(Debug, Error)]
pub enum ReteError {
    #[error("Unknown header: {0}")]
    UnknownHeader(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid value in column {column}: {value}")]
    InvalidValue { column: String, value: String },

    #[error("Paper {paper_id} references unknown author id: {author_id}")]
    UnknownAuthor { paper_id: String, author_id: Uuid },

    #[error("Empty row group for paper key: {0}")]
    EmptyPaperGroup(String),

    #[error("Unknown weight strategy: {0}")]
    UnknownStrategy(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ReteError {
    fn from(err: std::io::Error) -> Self {
        ReteError::Io(err.to_string())
    }
}

/// Result type for pipeline operations
pub type ReteResult<T> = Result<T, ReteError>;
