//! Paper assembly from grouped source rows

use crate::domain::{NormalizedAuthor, Paper};
use crate::error::{ReteError, ReteResult};
use crate::resolution::{AuthorRegistry, MatchPolicy};

/// One source row's paper fields plus its author record.
///
/// Rows sharing a paper key are assumed consistent in title and year; the
/// assembler reads both from the group's first row without verifying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceRow {
    pub title: String,
    pub year: i32,
    pub author: NormalizedAuthor,
}

/// Assemble one paper from its row group, resolving each author in row
/// order through the shared registry. Grows the registry as a side effect.
pub fn assemble_paper(
    key: &str,
    rows: &[SourceRow],
    registry: &mut AuthorRegistry,
    policy: &MatchPolicy,
) -> ReteResult<Paper> {
    let first = rows
        .first()
        .ok_or_else(|| ReteError::EmptyPaperGroup(key.to_string()))?;

    let authors = rows
        .iter()
        .map(|row| registry.resolve(&row.author, policy))
        .collect();

    Ok(Paper {
        id: key.to_string(),
        title: first.title.clone(),
        year: first.year,
        authors,
    })
}

/// Assemble every group into a paper, in group order
pub fn assemble_papers(
    groups: &[(String, Vec<SourceRow>)],
    registry: &mut AuthorRegistry,
    policy: &MatchPolicy,
) -> ReteResult<Vec<Paper>> {
    groups
        .iter()
        .map(|(key, rows)| assemble_paper(key, rows, registry, policy))
        .collect()
}
