//! Composite similarity scoring between author records

use strsim::jaro_winkler;

use crate::domain::{CanonicalAuthor, NormalizedAuthor};
use crate::resolution::normalize::fold_diacritics;

// Name and surname are the most stable identity signal; affiliation and
// department change as people move roles, so they carry half weight.
const NAME_WEIGHT: f64 = 1.0;
const AFFILIATION_WEIGHT: f64 = 0.5;
const TOTAL_WEIGHT: f64 = 3.0;

/// Composite similarity between two author records, in [0, 1].
///
/// Jaro-Winkler per field with a null field treated as the empty string,
/// combined as a weighted mean. Symmetric and deterministic.
pub fn score(a: &NormalizedAuthor, b: &NormalizedAuthor) -> f64 {
    score_fields(
        (&a.name, &a.surname, &a.affiliation, &a.department),
        (&b.name, &b.surname, &b.affiliation, &b.department),
    )
}

/// Similarity between a registry entry and an incoming record, ignoring ids
pub(crate) fn score_record(author: &CanonicalAuthor, record: &NormalizedAuthor) -> f64 {
    score_fields(
        (
            &author.name,
            &author.surname,
            &author.affiliation,
            &author.department,
        ),
        (
            &record.name,
            &record.surname,
            &record.affiliation,
            &record.department,
        ),
    )
}

type Fields<'a> = (
    &'a Option<String>,
    &'a Option<String>,
    &'a Option<String>,
    &'a Option<String>,
);

fn score_fields(a: Fields<'_>, b: Fields<'_>) -> f64 {
    (field_similarity(a.0, b.0) * NAME_WEIGHT
        + field_similarity(a.1, b.1) * NAME_WEIGHT
        + field_similarity(a.2, b.2) * AFFILIATION_WEIGHT
        + field_similarity(a.3, b.3) * AFFILIATION_WEIGHT)
        / TOTAL_WEIGHT
}

// Fields arrive folded from normalization; folding again here is a no-op
// for those and keeps hand-built records comparable.
fn field_similarity(a: &Option<String>, b: &Option<String>) -> f64 {
    let a = fold_diacritics(a.as_deref().unwrap_or(""));
    let b = fold_diacritics(b.as_deref().unwrap_or(""));
    jaro_winkler(&a, &b)
}
