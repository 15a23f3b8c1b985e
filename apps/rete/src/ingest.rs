//! IRIS export ingestion
//!
//! Reads the institutional IRIS CSV export, translates its column headers
//! to stable keys, normalizes author fields, and groups rows by the paper
//! handle for assembly. An unknown header is a fatal schema error.

use std::collections::HashMap;
use std::io::Read;

use lazy_static::lazy_static;

use rete_core::resolution::{normalize_field, normalize_opt, DEFAULT_NA_TOKENS};
use rete_core::{NormalizedAuthor, ReteError, ReteResult, SourceRow};

lazy_static! {
    /// Known IRIS export headers and their stable keys
    static ref HEADER_MAP: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("Handle", "handle");
        map.insert("Titolo", "title");
        map.insert("Anno di pubblicazione", "year");
        map.insert("Tipologia IRIS", "iris_type");
        map.insert("Tutti gli autori/Curatori", "authors");
        map.insert("Nr autori/Curatori (numero)", "num_authors");
        map.insert(
            "contributors: Autori/curatori riconosciuti (elenco)",
            "recognized_authors",
        );
        map.insert(
            "contributors: Autori/curatori riconosciuti (conteggio)",
            "num_recognized_authors",
        );
        map.insert(
            "contributors: Autori/curatori attualmente afferenti (elenco)",
            "currently_affiliated_authors",
        );
        map.insert(
            "contributors: Autori/curatori attualmente afferenti (Nr)",
            "num_currently_affiliated_authors",
        );
        map.insert("Lingua (denominazione)", "language");
        map.insert("Nome rivista", "journal_name");
        map.insert("Rivista/Serie: ISSN", "journal_issn");
        map.insert("Rivista: codice ANCE", "journal_ance_code");
        map.insert("rivista: DOAJ (si/no)", "journal_is_doaj");
        map.insert(
            "rivista: policy sherpa/romeo per versione editoriale",
            "journal_sherpa_romeo_policy",
        );
        map.insert(
            "rivista: policy sherpa/romeo per post-print",
            "journal_sherpa_romeo_postprint_policy",
        );
        map.insert("rivista: editore", "journal_publisher");
        map.insert("autore: Cognome", "author_surname");
        map.insert("autore: Nome", "author_name");
        map.insert("autore: ORCID", "author_orcid");
        map.insert("autore: ID persona (CRIS)", "author_cris_id");
        map.insert("autore: Ruolo al 01/07/2023", "author_role");
        map.insert(
            "autore: Unità organizzativa interna al 01/07/2023",
            "author_department",
        );
        map.insert("scopus: Identificativo", "scopus_id");
        map.insert("scopus: affiliazioni", "scopus_affiliations");
        map.insert("scopus: nazioni", "scopus_countries");
        map.insert(
            "scopus: presenza coautore straniero",
            "scopus_has_foreign_coauthor",
        );
        map
    };
}

/// Translate a raw export header to its stable key
pub fn translate_header(raw: &str) -> ReteResult<&'static str> {
    let cleaned = raw.trim().replace('\n', " ");
    HEADER_MAP
        .get(cleaned.as_str())
        .copied()
        .ok_or(ReteError::UnknownHeader(cleaned))
}

/// Positions of the consumed columns in a translated header row
struct ColumnIndex {
    handle: usize,
    title: usize,
    year: usize,
    author_name: usize,
    author_surname: usize,
    author_department: Option<usize>,
    author_cris_id: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &[&'static str]) -> ReteResult<Self> {
        let position = |key: &str| headers.iter().position(|h| *h == key);
        let required = |key: &'static str| {
            position(key).ok_or_else(|| ReteError::MissingColumn(key.to_string()))
        };

        Ok(Self {
            handle: required("handle")?,
            title: required("title")?,
            year: required("year")?,
            author_name: required("author_name")?,
            author_surname: required("author_surname")?,
            author_department: position("author_department"),
            author_cris_id: position("author_cris_id"),
        })
    }
}

/// One export row keyed by its paper handle
#[derive(Clone, Debug)]
pub struct IrisRow {
    pub handle: String,
    pub row: SourceRow,
}

/// Read all rows from one IRIS export stream
pub fn read_rows<R: Read>(reader: R) -> ReteResult<Vec<IrisRow>> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);

    let headers: Vec<&'static str> = csv_reader
        .headers()
        .map_err(|e| ReteError::Io(e.to_string()))?
        .iter()
        .map(translate_header)
        .collect::<ReteResult<_>>()?;
    let index = ColumnIndex::from_headers(&headers)?;

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| ReteError::Io(e.to_string()))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        rows.push(parse_record(&record, &index)?);
    }

    Ok(rows)
}

fn parse_record(record: &csv::StringRecord, index: &ColumnIndex) -> ReteResult<IrisRow> {
    let field = |i: usize| record.get(i).unwrap_or("");
    let optional = |i: Option<usize>| i.and_then(|i| record.get(i));

    let handle = field(index.handle).trim().to_string();
    let title = field(index.title).trim().to_string();

    let raw_year = field(index.year);
    let year: i32 = raw_year
        .trim()
        .parse()
        .map_err(|_| ReteError::InvalidValue {
            column: "year".to_string(),
            value: raw_year.to_string(),
        })?;

    // IRIS exports cover a single institution, so no affiliation column exists
    let author = NormalizedAuthor {
        name: normalize_field(field(index.author_name), DEFAULT_NA_TOKENS),
        surname: normalize_field(field(index.author_surname), DEFAULT_NA_TOKENS),
        affiliation: None,
        department: normalize_opt(optional(index.author_department), DEFAULT_NA_TOKENS),
        source_id: normalize_opt(optional(index.author_cris_id), DEFAULT_NA_TOKENS),
    };

    Ok(IrisRow {
        handle,
        row: SourceRow {
            title,
            year,
            author,
        },
    })
}

/// Group rows by paper handle, preserving first-seen order
pub fn group_by_handle(rows: Vec<IrisRow>) -> Vec<(String, Vec<SourceRow>)> {
    let mut groups: Vec<(String, Vec<SourceRow>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for iris_row in rows {
        match index.get(&iris_row.handle) {
            Some(&slot) => groups[slot].1.push(iris_row.row),
            None => {
                index.insert(iris_row.handle.clone(), groups.len());
                groups.push((iris_row.handle, vec![iris_row.row]));
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
Handle,Titolo,Anno di pubblicazione,autore: Nome,autore: Cognome,\"autore: ID persona (CRIS)\",autore: Unità organizzativa interna al 01/07/2023
hdl/1,First Paper,2019,Ada,Lovelace,p1,Computer Science
hdl/1,First Paper,2019,Charles,Babbage,p2,Mathematics
hdl/2,Second Paper,2021,Ada,Lovelace,p1,n.d.
";

    #[test]
    fn test_translate_known_headers() {
        assert_eq!(translate_header("Handle").unwrap(), "handle");
        assert_eq!(translate_header(" Titolo ").unwrap(), "title");
        assert_eq!(
            translate_header("autore: ID persona (CRIS)").unwrap(),
            "author_cris_id"
        );
    }

    #[test]
    fn test_unknown_header_is_fatal_and_named() {
        let err = translate_header("Colonna Misteriosa").unwrap_err();
        assert!(matches!(
            err,
            ReteError::UnknownHeader(name) if name == "Colonna Misteriosa"
        ));
    }

    #[test]
    fn test_read_rows_parses_fields() {
        let rows = read_rows(EXPORT.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);

        let first = &rows[0];
        assert_eq!(first.handle, "hdl/1");
        assert_eq!(first.row.title, "First Paper");
        assert_eq!(first.row.year, 2019);
        assert_eq!(first.row.author.name.as_deref(), Some("ada"));
        assert_eq!(first.row.author.surname.as_deref(), Some("lovelace"));
        assert_eq!(first.row.author.source_id.as_deref(), Some("p1"));
    }

    #[test]
    fn test_na_department_becomes_none() {
        let rows = read_rows(EXPORT.as_bytes()).unwrap();
        assert_eq!(rows[2].row.author.department, None);
    }

    #[test]
    fn test_group_by_handle_preserves_order() {
        let rows = read_rows(EXPORT.as_bytes()).unwrap();
        let groups = group_by_handle(rows);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "hdl/1");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "hdl/2");
        assert_eq!(groups[1].1.len(), 1);
    }

    #[test]
    fn test_missing_required_column() {
        let export = "Handle,Titolo\nhdl/1,Paper\n";
        let err = read_rows(export.as_bytes()).unwrap_err();
        assert!(matches!(err, ReteError::MissingColumn(col) if col == "year"));
    }

    #[test]
    fn test_unparsable_year() {
        let export = "\
Handle,Titolo,Anno di pubblicazione,autore: Nome,autore: Cognome
hdl/1,Paper,duemila,Ada,Lovelace
";
        let err = read_rows(export.as_bytes()).unwrap_err();
        assert!(matches!(err, ReteError::InvalidValue { column, .. } if column == "year"));
    }
}
