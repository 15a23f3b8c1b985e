//! Incremental author registry and resolution

use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::{CanonicalAuthor, NormalizedAuthor};
use crate::resolution::similarity;

/// Default similarity threshold, kept from the source system's constant
pub const DEFAULT_THRESHOLD: f64 = 0.25;

/// Which side of the threshold counts as a match.
///
/// The source system gated a match on the similarity score being *below*
/// its threshold, contradicting its own stated intent of merging similar
/// authors. Both readings are kept selectable rather than silently fixed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThresholdDirection {
    /// Match when similarity >= threshold
    #[default]
    AtLeast,
    /// Match when similarity < threshold (legacy source behavior)
    Below,
}

/// Match predicate for the fuzzy resolution scan
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchPolicy {
    pub threshold: f64,
    pub direction: ThresholdDirection,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            direction: ThresholdDirection::AtLeast,
        }
    }
}

impl MatchPolicy {
    pub fn matches(&self, score: f64) -> bool {
        match self.direction {
            ThresholdDirection::AtLeast => score >= self.threshold,
            ThresholdDirection::Below => score < self.threshold,
        }
    }
}

/// The growing set of canonical authors for one resolution run.
///
/// Owns the id-to-author mapping plus a source-id index so exact external
/// key matches win without any field comparison. Entries are never mutated
/// or removed once minted: the first record seen for a cluster defines it.
#[derive(Debug, Default)]
pub struct AuthorRegistry {
    authors: HashMap<Uuid, CanonicalAuthor>,
    by_source_id: HashMap<String, Uuid>,
    // Mint order, so scans and document emission are deterministic
    order: Vec<Uuid>,
}

impl AuthorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&CanonicalAuthor> {
        self.authors.get(id)
    }

    /// Resolve a record to a canonical author id.
    ///
    /// Records carrying a `source_id` partition by that key alone: a known
    /// key returns the existing id, an unseen key mints a new author. Only
    /// key-less records go through the fuzzy similarity scan, where the
    /// first registry entry satisfying the policy wins; with no match a
    /// fresh author is minted.
    ///
    /// O(registry size) per call. Only minting mutates the registry.
    pub fn resolve(&mut self, record: &NormalizedAuthor, policy: &MatchPolicy) -> Uuid {
        if let Some(source_id) = &record.source_id {
            return match self.by_source_id.get(source_id) {
                Some(id) => *id,
                None => self.mint(record),
            };
        }

        for id in &self.order {
            if let Some(saved) = self.authors.get(id) {
                if policy.matches(similarity::score_record(saved, record)) {
                    return *id;
                }
            }
        }

        self.mint(record)
    }

    fn mint(&mut self, record: &NormalizedAuthor) -> Uuid {
        let author = CanonicalAuthor::mint(record);
        let id = author.id;
        if let Some(source_id) = &record.source_id {
            self.by_source_id.insert(source_id.clone(), id);
        }
        self.order.push(id);
        self.authors.insert(id, author);
        id
    }

    /// Consume the registry into its canonical authors, in mint order
    pub fn into_authors(mut self) -> Vec<CanonicalAuthor> {
        self.order
            .iter()
            .filter_map(|id| self.authors.remove(id))
            .collect()
    }
}
