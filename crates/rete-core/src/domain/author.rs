//! Author representations

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single source row's author fields after normalization.
///
/// Absent, blank, or not-a-value fields are `None`. `source_id` carries the
/// source system's own person key (e.g. a CRIS person id) when one exists;
/// it is used for exact matching and never serialized into the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizedAuthor {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub affiliation: Option<String>,
    pub department: Option<String>,
    pub source_id: Option<String>,
}

/// The single deduplicated identity a cluster of raw records resolves to.
///
/// Minted exactly once, the first time a raw record fails to match any
/// registry entry; never mutated afterward within a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalAuthor {
    pub id: Uuid,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub affiliation: Option<String>,
    pub department: Option<String>,
}

impl CanonicalAuthor {
    /// Mint a canonical author from a normalized record under a fresh id
    pub fn mint(record: &NormalizedAuthor) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: record.name.clone(),
            surname: record.surname.clone(),
            affiliation: record.affiliation.clone(),
            department: record.department.clone(),
        }
    }
}
