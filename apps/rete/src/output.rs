//! Edge list and author list emission
//!
//! Writes the two derived artifacts of a network run and fills the
//! statistics placeholders in output path templates.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use rete_core::{CanonicalAuthor, Graph, GraphStats, ReteError, ReteResult};

/// Substitute `{minyear}`, `{maxyear}`, `{numnodes}` and `{numedges}` in an
/// output path template. Missing year bounds (empty paper set) render as
/// empty strings.
pub fn render_output_path(template: &str, stats: &GraphStats) -> String {
    let year = |value: Option<i32>| value.map(|y| y.to_string()).unwrap_or_default();

    template
        .replace("{minyear}", &year(stats.min_year))
        .replace("{maxyear}", &year(stats.max_year))
        .replace("{numnodes}", &stats.node_count.to_string())
        .replace("{numedges}", &stats.edge_count.to_string())
}

/// Write the edge list as CSV: `node_1,node_2,weight`, ids quoted, weights
/// numeric (integer for unweighted/linear, floating point for
/// paper-size-moderated).
pub fn write_edgelist<W: Write>(writer: W, graph: &Graph) -> ReteResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(writer);

    csv_writer
        .write_record(["node_1", "node_2", "weight"])
        .map_err(|e| ReteError::Io(e.to_string()))?;

    for edge in &graph.edges {
        csv_writer
            .write_record([
                edge.node_a.to_string(),
                edge.node_b.to_string(),
                edge.weight.to_string(),
            ])
            .map_err(|e| ReteError::Io(e.to_string()))?;
    }

    csv_writer.flush().map_err(|e| ReteError::Io(e.to_string()))
}

/// Write the author list as CSV: `name,surname,affiliation,department,id`,
/// one row per canonical author, null fields as empty strings.
pub fn write_authorlist<W: Write>(writer: W, authors: &[CanonicalAuthor]) -> ReteResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(writer);

    csv_writer
        .write_record(["name", "surname", "affiliation", "department", "id"])
        .map_err(|e| ReteError::Io(e.to_string()))?;

    for author in authors {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        csv_writer
            .write_record([
                field(&author.name),
                field(&author.surname),
                field(&author.affiliation),
                field(&author.department),
                author.id.to_string(),
            ])
            .map_err(|e| ReteError::Io(e.to_string()))?;
    }

    csv_writer.flush().map_err(|e| ReteError::Io(e.to_string()))
}
