//! Canonical `{authors, papers}` document serialization

use std::io::{Read, Write};

use crate::domain::Document;
use crate::error::{ReteError, ReteResult};

/// Read and validate a canonical document from a JSON stream.
///
/// Validation enforces the load-time referential invariant before any
/// downstream consumer sees the document.
pub fn read_document<R: Read>(reader: R) -> ReteResult<Document> {
    let document: Document =
        serde_json::from_reader(reader).map_err(|e| ReteError::InvalidDocument(e.to_string()))?;
    document.validate()?;
    Ok(document)
}

/// Write a canonical document as JSON
pub fn write_document<W: Write>(writer: W, document: &Document) -> ReteResult<()> {
    serde_json::to_writer(writer, document).map_err(|e| ReteError::Io(e.to_string()))
}
