//! Weighted co-authorship graph construction
//!
//! Turns a set of papers referencing canonical author ids into a
//! deduplicated edge list under a selectable weighting strategy, plus the
//! summary statistics used to parameterize output naming.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::domain::Paper;
use crate::error::ReteError;

/// Policy governing how repeated co-authorship accumulates into a weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WeightStrategy {
    /// Weight 1 for any pair that co-authored at least one paper
    #[default]
    Unweighted,
    /// Weight equals the count of shared papers
    Linear,
    /// Weight sums 1/(paper author count) per shared paper, diluting the
    /// weaker per-pair signal of large-author-count papers. The divisor is
    /// the paper's distinct author count, repeated ids excluded.
    PaperSizeModerated,
}

impl WeightStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightStrategy::Unweighted => "unweighted",
            WeightStrategy::Linear => "linear",
            WeightStrategy::PaperSizeModerated => "paper_size_moderated",
        }
    }
}

impl FromStr for WeightStrategy {
    type Err = ReteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unweighted" => Ok(WeightStrategy::Unweighted),
            "linear" => Ok(WeightStrategy::Linear),
            "paper_size_moderated" => Ok(WeightStrategy::PaperSizeModerated),
            other => Err(ReteError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Accumulated edge weight, integer- or fraction-valued by strategy
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeWeight {
    Count(u64),
    Fraction(f64),
}

impl fmt::Display for EdgeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeWeight::Count(n) => write!(f, "{n}"),
            // Debug formatting keeps a trailing .0 on whole fractions
            EdgeWeight::Fraction(x) => write!(f, "{x:?}"),
        }
    }
}

/// An unordered pair of canonical authors with an accumulated weight.
///
/// `node_a` < `node_b` always holds: pairs are keyed in canonical sorted
/// order, so at most one edge exists per pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub node_a: Uuid,
    pub node_b: Uuid,
    pub weight: EdgeWeight,
}

/// Summary statistics derived during graph construction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub node_count: usize,
    pub edge_count: usize,
}

/// The finished edge list, in accumulator insertion order
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    pub edges: Vec<Edge>,
    pub stats: GraphStats,
}

/// Build the weighted co-authorship graph for a set of papers.
///
/// Each paper's author list is sorted and deduplicated so every unordered
/// pair maps to one canonical key; papers with fewer than two distinct
/// authors contribute no edges. Deterministic for a given input and
/// strategy.
pub fn build_graph(papers: &[Paper], strategy: WeightStrategy) -> Graph {
    let mut edges: Vec<Edge> = Vec::new();
    let mut index: HashMap<(Uuid, Uuid), usize> = HashMap::new();
    let mut nodes: HashSet<Uuid> = HashSet::new();
    let mut min_year: Option<i32> = None;
    let mut max_year: Option<i32> = None;

    for paper in papers {
        min_year = Some(min_year.map_or(paper.year, |y| y.min(paper.year)));
        max_year = Some(max_year.map_or(paper.year, |y| y.max(paper.year)));
        nodes.extend(paper.authors.iter().copied());

        let mut authors = paper.authors.clone();
        authors.sort();
        authors.dedup();
        let paper_size = authors.len();

        for (i, &a) in authors.iter().enumerate() {
            for &b in &authors[i + 1..] {
                let slot = *index.entry((a, b)).or_insert_with(|| {
                    edges.push(Edge {
                        node_a: a,
                        node_b: b,
                        weight: zero_weight(strategy),
                    });
                    edges.len() - 1
                });
                let edge = &mut edges[slot];
                edge.weight = next_weight(edge.weight, strategy, paper_size);
            }
        }
    }

    let stats = GraphStats {
        min_year,
        max_year,
        node_count: nodes.len(),
        edge_count: edges.len(),
    };

    Graph { edges, stats }
}

fn zero_weight(strategy: WeightStrategy) -> EdgeWeight {
    match strategy {
        WeightStrategy::Unweighted | WeightStrategy::Linear => EdgeWeight::Count(0),
        WeightStrategy::PaperSizeModerated => EdgeWeight::Fraction(0.0),
    }
}

fn next_weight(current: EdgeWeight, strategy: WeightStrategy, paper_size: usize) -> EdgeWeight {
    match (strategy, current) {
        (WeightStrategy::Unweighted, _) => EdgeWeight::Count(1),
        (WeightStrategy::Linear, EdgeWeight::Count(n)) => EdgeWeight::Count(n + 1),
        (WeightStrategy::Linear, EdgeWeight::Fraction(_)) => EdgeWeight::Count(1),
        (WeightStrategy::PaperSizeModerated, EdgeWeight::Fraction(x)) => {
            EdgeWeight::Fraction(x + 1.0 / paper_size as f64)
        }
        (WeightStrategy::PaperSizeModerated, EdgeWeight::Count(_)) => {
            EdgeWeight::Fraction(1.0 / paper_size as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(id: &str, year: i32, authors: &[Uuid]) -> Paper {
        Paper {
            id: id.to_string(),
            title: format!("Paper {id}"),
            year,
            authors: authors.to_vec(),
        }
    }

    #[test]
    fn test_empty_input_yields_empty_graph() {
        let graph = build_graph(&[], WeightStrategy::Linear);
        assert!(graph.edges.is_empty());
        assert_eq!(graph.stats.min_year, None);
        assert_eq!(graph.stats.node_count, 0);
    }

    #[test]
    fn test_single_author_paper_contributes_no_edges() {
        let a = Uuid::new_v4();
        let graph = build_graph(&[paper("1", 2020, &[a])], WeightStrategy::Linear);
        assert!(graph.edges.is_empty());
        assert_eq!(graph.stats.node_count, 1);
    }

    #[test]
    fn test_pair_is_keyed_in_sorted_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let papers = [paper("1", 2020, &[a, b]), paper("2", 2021, &[b, a])];

        let graph = build_graph(&papers, WeightStrategy::Linear);
        assert_eq!(graph.edges.len(), 1);
        let edge = &graph.edges[0];
        assert!(edge.node_a < edge.node_b);
        assert_eq!(edge.weight, EdgeWeight::Count(2));
    }

    #[test]
    fn test_unweighted_stays_at_one() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let papers = [
            paper("1", 2020, &[a, b]),
            paper("2", 2021, &[a, b]),
            paper("3", 2022, &[a, b]),
        ];

        let graph = build_graph(&papers, WeightStrategy::Unweighted);
        assert_eq!(graph.edges[0].weight, EdgeWeight::Count(1));
    }

    #[test]
    fn test_linear_counts_shared_papers() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let papers = [
            paper("1", 2020, &[a, b, c]),
            paper("2", 2021, &[a, b]),
        ];

        let graph = build_graph(&papers, WeightStrategy::Linear);
        let weight_of = |x: Uuid, y: Uuid| {
            let (lo, hi) = if x < y { (x, y) } else { (y, x) };
            graph
                .edges
                .iter()
                .find(|e| e.node_a == lo && e.node_b == hi)
                .map(|e| e.weight)
        };

        assert_eq!(weight_of(a, b), Some(EdgeWeight::Count(2)));
        assert_eq!(weight_of(a, c), Some(EdgeWeight::Count(1)));
        assert_eq!(weight_of(b, c), Some(EdgeWeight::Count(1)));
    }

    #[test]
    fn test_paper_size_moderated_sums_reciprocals() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        // Two shared papers, both with exactly two authors: 0.5 + 0.5
        let papers = [paper("1", 2020, &[a, b]), paper("2", 2021, &[a, b])];

        let graph = build_graph(&papers, WeightStrategy::PaperSizeModerated);
        assert_eq!(graph.edges[0].weight, EdgeWeight::Fraction(1.0));
    }

    #[test]
    fn test_duplicate_author_ids_do_not_double_count() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let graph = build_graph(&[paper("1", 2020, &[a, a, b])], WeightStrategy::Linear);

        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].weight, EdgeWeight::Count(1));
    }

    #[test]
    fn test_moderated_divisor_is_distinct_author_count() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        // One repeated id: two distinct authors, so the share is 1/2
        let graph = build_graph(
            &[paper("1", 2020, &[a, a, b])],
            WeightStrategy::PaperSizeModerated,
        );

        assert_eq!(graph.edges[0].weight, EdgeWeight::Fraction(0.5));
    }

    #[test]
    fn test_stats_cover_years_nodes_edges() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let papers = [
            paper("1", 1999, &[a, b]),
            paper("2", 2023, &[b, c]),
        ];

        let graph = build_graph(&papers, WeightStrategy::Unweighted);
        assert_eq!(graph.stats.min_year, Some(1999));
        assert_eq!(graph.stats.max_year, Some(2023));
        assert_eq!(graph.stats.node_count, 3);
        assert_eq!(graph.stats.edge_count, 2);
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let papers = [
            paper("1", 2020, &[a, b, c]),
            paper("2", 2021, &[c, a]),
        ];

        let first = build_graph(&papers, WeightStrategy::PaperSizeModerated);
        let second = build_graph(&papers, WeightStrategy::PaperSizeModerated);
        assert_eq!(first, second);
    }

    #[test]
    fn test_weight_display_formats_by_kind() {
        assert_eq!(EdgeWeight::Count(3).to_string(), "3");
        assert_eq!(EdgeWeight::Fraction(1.0).to_string(), "1.0");
        assert_eq!(EdgeWeight::Fraction(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(
            "paper_size_moderated".parse::<WeightStrategy>().unwrap(),
            WeightStrategy::PaperSizeModerated
        );
        assert!("quadratic".parse::<WeightStrategy>().is_err());
    }
}
