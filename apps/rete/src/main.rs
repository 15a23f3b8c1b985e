//! rete - co-authorship network builder for IRIS/CRIS exports
//!
//! Pipeline stages are exposed as subcommands:
//! - `resolve`: IRIS CSV export(s) → canonical `{authors, papers}` document
//! - `network`: document → weighted edge list + author list
//! - `filter`: document → reduced document
//! - `anonymize`: document → document with remapped author ids

mod ingest;
mod output;

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use rete_core::{
    anonymize, assemble_papers, build_graph, filter, read_document, write_document,
    AuthorRegistry, Document, MatchPolicy, ReteError, ReteResult, ThresholdDirection,
    WeightStrategy, DEFAULT_THRESHOLD,
};

#[derive(Parser)]
#[command(name = "rete", about = "Co-authorship network builder for IRIS/CRIS exports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve an IRIS export into a canonical authors/papers document
    Resolve {
        /// Export CSV file, or a folder of export CSV files
        input: PathBuf,
        /// Output document path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Similarity threshold for the fuzzy match
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,
        /// Gate matches on similarity below the threshold, as the legacy
        /// pipeline did, instead of at-or-above
        #[arg(long)]
        legacy_threshold: bool,
    },
    /// Build the weighted co-authorship network from a document
    Network {
        /// Edge list output path; may embed {minyear}, {maxyear},
        /// {numnodes}, {numedges}
        edgelist: String,
        /// Author list output path; accepts the same placeholders
        authors: String,
        /// Input document (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// How edge weights accumulate
        #[arg(long, default_value = "unweighted")]
        weight_strategy: WeightStrategy,
    },
    /// Apply document filters
    Filter {
        /// Input document (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output document (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Filters to apply, in order
        #[arg(long = "filter", default_value = "remove-single-author-papers")]
        filters: Vec<String>,
    },
    /// Remap every canonical author id to a fresh random id
    Anonymize {
        /// Input document (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output document (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli.command) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> ReteResult<()> {
    match command {
        Command::Resolve {
            input,
            output,
            threshold,
            legacy_threshold,
        } => resolve(&input, output.as_deref(), threshold, legacy_threshold),
        Command::Network {
            edgelist,
            authors,
            input,
            weight_strategy,
        } => network(&edgelist, &authors, input.as_deref(), weight_strategy),
        Command::Filter {
            input,
            output,
            filters,
        } => apply_filters(input.as_deref(), output.as_deref(), &filters),
        Command::Anonymize { input, output } => {
            let document = read_input_document(input.as_deref())?;
            let anonymized = anonymize(&document)?;
            write_output_document(output.as_deref(), &anonymized)
        }
    }
}

fn resolve(
    input: &Path,
    output: Option<&Path>,
    threshold: f64,
    legacy_threshold: bool,
) -> ReteResult<()> {
    let policy = MatchPolicy {
        threshold,
        direction: if legacy_threshold {
            ThresholdDirection::Below
        } else {
            ThresholdDirection::AtLeast
        },
    };

    let mut rows = Vec::new();
    for path in export_files(input)? {
        info!(path = %path.display(), "reading export");
        rows.extend(ingest::read_rows(File::open(&path)?)?);
    }
    info!(rows = rows.len(), "read export rows");

    let groups = ingest::group_by_handle(rows);
    let mut registry = AuthorRegistry::new();
    let papers = assemble_papers(&groups, &mut registry, &policy)?;
    info!(papers = papers.len(), authors = registry.len(), "resolved");

    let document = Document {
        authors: registry.into_authors(),
        papers,
    };
    write_output_document(output, &document)
}

fn network(
    edgelist_template: &str,
    authors_template: &str,
    input: Option<&Path>,
    strategy: WeightStrategy,
) -> ReteResult<()> {
    let document = read_input_document(input)?;
    let graph = build_graph(&document.papers, strategy);
    info!(
        nodes = graph.stats.node_count,
        edges = graph.stats.edge_count,
        strategy = strategy.as_str(),
        "built network"
    );

    let edgelist_path = output::render_output_path(edgelist_template, &graph.stats);
    let authors_path = output::render_output_path(authors_template, &graph.stats);

    output::write_edgelist(File::create(&edgelist_path)?, &graph)?;
    output::write_authorlist(File::create(&authors_path)?, &document.authors)?;
    info!(edgelist = %edgelist_path, authors = %authors_path, "wrote outputs");

    Ok(())
}

fn apply_filters(
    input: Option<&Path>,
    output: Option<&Path>,
    names: &[String],
) -> ReteResult<()> {
    let mut document = read_input_document(input)?;

    for name in names {
        let document_filter =
            filter::filter_by_name(name).ok_or_else(|| ReteError::InvalidValue {
                column: "--filter".to_string(),
                value: name.clone(),
            })?;
        let papers_before = document.papers.len();
        document = document_filter(document);
        info!(
            filter = %name,
            removed = papers_before - document.papers.len(),
            "applied filter"
        );
    }

    write_output_document(output, &document)
}

/// Collect export CSVs: a folder yields its `*.csv` children in name order
fn export_files(input: &Path) -> ReteResult<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    files.sort();
    Ok(files)
}

fn read_input_document(input: Option<&Path>) -> ReteResult<Document> {
    let reader: Box<dyn Read> = match input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    read_document(reader)
}

fn write_output_document(output: Option<&Path>, document: &Document) -> ReteResult<()> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    write_document(writer, document)
}
