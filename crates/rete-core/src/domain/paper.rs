//! Papers and the canonical document aggregate

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::CanonicalAuthor;
use crate::error::{ReteError, ReteResult};

/// A publication referencing resolved authors in source row order.
///
/// Duplicate author ids are preserved as given; consumers dedupe when needed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub authors: Vec<Uuid>,
}

/// The canonical `{authors, papers}` document
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub authors: Vec<CanonicalAuthor>,
    pub papers: Vec<Paper>,
}

impl Document {
    /// Check the referential invariant: every paper author id must exist
    /// in the authors list. Must hold before graph construction.
    pub fn validate(&self) -> ReteResult<()> {
        let known: HashSet<Uuid> = self.authors.iter().map(|a| a.id).collect();

        for paper in &self.papers {
            for author_id in &paper.authors {
                if !known.contains(author_id) {
                    return Err(ReteError::UnknownAuthor {
                        paper_id: paper.id.clone(),
                        author_id: *author_id,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NormalizedAuthor;

    fn document_with_one_paper() -> Document {
        let author = CanonicalAuthor::mint(&NormalizedAuthor::default());
        let paper = Paper {
            id: "hdl/1".to_string(),
            title: "A Paper".to_string(),
            year: 2021,
            authors: vec![author.id],
        };
        Document {
            authors: vec![author],
            papers: vec![paper],
        }
    }

    #[test]
    fn test_validate_accepts_consistent_document() {
        assert!(document_with_one_paper().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_dangling_author_id() {
        let mut document = document_with_one_paper();
        let dangling = Uuid::new_v4();
        document.papers[0].authors.push(dangling);

        let err = document.validate().unwrap_err();
        match err {
            ReteError::UnknownAuthor {
                paper_id,
                author_id,
            } => {
                assert_eq!(paper_id, "hdl/1");
                assert_eq!(author_id, dangling);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_accepts_empty_document() {
        assert!(Document::default().validate().is_ok());
    }
}
