//! Document filters
//!
//! Filters take a document and return a reduced one. They are registered
//! by name so the command line can select which to apply.

use crate::domain::Document;

/// A named document filter
pub type DocumentFilter = fn(Document) -> Document;

/// Filters selectable by name from the command line
pub const DOCUMENT_FILTERS: &[(&str, DocumentFilter)] =
    &[("remove-single-author-papers", remove_single_author_papers)];

/// Look up a filter by its registered name
pub fn filter_by_name(name: &str) -> Option<DocumentFilter> {
    DOCUMENT_FILTERS
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, f)| *f)
}

/// Drop papers with fewer than two authors.
///
/// Such papers contribute no co-authorship edges; removing them up front
/// shrinks the document without changing the graph.
pub fn remove_single_author_papers(document: Document) -> Document {
    let Document { authors, papers } = document;
    Document {
        authors,
        papers: papers
            .into_iter()
            .filter(|paper| paper.authors.len() > 1)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CanonicalAuthor, NormalizedAuthor, Paper};

    fn document() -> Document {
        let a = CanonicalAuthor::mint(&NormalizedAuthor::default());
        let b = CanonicalAuthor::mint(&NormalizedAuthor::default());
        let papers = vec![
            Paper {
                id: "solo".to_string(),
                title: "Solo".to_string(),
                year: 2020,
                authors: vec![a.id],
            },
            Paper {
                id: "pair".to_string(),
                title: "Pair".to_string(),
                year: 2021,
                authors: vec![a.id, b.id],
            },
        ];
        Document {
            authors: vec![a, b],
            papers,
        }
    }

    #[test]
    fn test_removes_single_author_papers() {
        let filtered = remove_single_author_papers(document());
        assert_eq!(filtered.papers.len(), 1);
        assert_eq!(filtered.papers[0].id, "pair");
        assert!(filtered.papers.iter().all(|p| p.authors.len() > 1));
    }

    #[test]
    fn test_authors_list_is_untouched() {
        let filtered = remove_single_author_papers(document());
        assert_eq!(filtered.authors.len(), 2);
    }

    #[test]
    fn test_filter_lookup() {
        assert!(filter_by_name("remove-single-author-papers").is_some());
        assert!(filter_by_name("no-such-filter").is_none());
    }
}
