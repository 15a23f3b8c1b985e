//! Author entity resolution
//!
//! This module decides whether raw author records denote the same
//! real-world person: field normalization, composite similarity scoring,
//! and the incremental registry that clusters records into canonical
//! authors with stable ids.

mod normalize;
mod resolver;
mod similarity;

pub use normalize::{normalize_field, normalize_opt, DEFAULT_NA_TOKENS};
pub use resolver::{AuthorRegistry, MatchPolicy, ThresholdDirection, DEFAULT_THRESHOLD};
pub use similarity::score;
