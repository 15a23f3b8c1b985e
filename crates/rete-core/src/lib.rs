//! rete-core: author entity resolution and co-authorship graph construction
//!
//! This library provides pure Rust implementations of:
//! - Field normalization for raw bibliographic author fields
//! - Composite similarity scoring between author records
//! - Incremental clustering of raw records into canonical authors
//! - Paper assembly from grouped export rows
//! - Weighted, deduplicated co-authorship edge list construction
//! - Document filters and id anonymization
//!
//! The library is synchronous and batch-oriented: one run consumes a finite
//! in-memory set of rows and produces a canonical `{authors, papers}`
//! document, from which the graph builder derives an edge list.

pub mod anonymize;
pub mod assemble;
pub mod document;
pub mod domain;
pub mod error;
pub mod filter;
pub mod graph;
pub mod resolution;

// Re-export main types for convenience
pub use anonymize::anonymize;
pub use assemble::{assemble_paper, assemble_papers, SourceRow};
pub use document::{read_document, write_document};
pub use domain::{CanonicalAuthor, Document, NormalizedAuthor, Paper};
pub use error::{ReteError, ReteResult};
pub use filter::remove_single_author_papers;
pub use graph::{build_graph, Edge, EdgeWeight, Graph, GraphStats, WeightStrategy};
pub use resolution::{
    normalize_field, score, AuthorRegistry, MatchPolicy, ThresholdDirection, DEFAULT_NA_TOKENS,
    DEFAULT_THRESHOLD,
};
