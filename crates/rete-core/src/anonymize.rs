//! Consistent random remapping of canonical author ids
//!
//! Replaces every canonical author id with a fresh random one, applied
//! consistently across the authors list and every paper's author
//! references, so a document can be shared without exposing source ids.

use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::{CanonicalAuthor, Document, Paper};
use crate::error::{ReteError, ReteResult};

/// Remap every author id in the document to a fresh v4 UUID.
///
/// The output document satisfies the same referential invariant as the
/// input; a paper referencing an id absent from the authors list is a
/// schema error.
pub fn anonymize(document: &Document) -> ReteResult<Document> {
    let mut remap: HashMap<Uuid, Uuid> = HashMap::new();

    let authors: Vec<CanonicalAuthor> = document
        .authors
        .iter()
        .map(|author| {
            let id = *remap.entry(author.id).or_insert_with(Uuid::new_v4);
            CanonicalAuthor {
                id,
                ..author.clone()
            }
        })
        .collect();

    let papers: Vec<Paper> = document
        .papers
        .iter()
        .map(|paper| {
            let authors = paper
                .authors
                .iter()
                .map(|id| {
                    remap
                        .get(id)
                        .copied()
                        .ok_or_else(|| ReteError::UnknownAuthor {
                            paper_id: paper.id.clone(),
                            author_id: *id,
                        })
                })
                .collect::<ReteResult<Vec<Uuid>>>()?;
            Ok(Paper {
                authors,
                ..paper.clone()
            })
        })
        .collect::<ReteResult<Vec<Paper>>>()?;

    Ok(Document { authors, papers })
}
