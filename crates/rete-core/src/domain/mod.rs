//! Domain types for the resolution pipeline
//!
//! - NormalizedAuthor: a source row's author fields, comparison-ready
//! - CanonicalAuthor: the deduplicated identity a cluster resolves to
//! - Paper: a publication referencing canonical author ids
//! - Document: the canonical `{authors, papers}` aggregate

pub mod author;
pub mod paper;

pub use author::*;
pub use paper::*;
