//! TEI bibliography extraction
//!
//! GROBID turns the reference section of a paper into TEI XML, one
//! `<biblStruct>` per cited work. This crate reads those structures and
//! renders them as `@inproceedings` BibTeX entries.

mod entry;
mod extract;
mod formatter;
pub mod xml;

pub use entry::{BibEntry, BibField};
pub use extract::{extract_references, TeiAuthor, TeiReference};
pub use formatter::{format_entries, format_entry};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while converting TEI documents
#[derive(Debug, Error)]
pub enum TeiError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("XML parse error: {0}")]
    Xml(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for TEI operations
pub type TeiResult<T> = Result<T, TeiError>;

/// Parse TEI XML text into BibTeX entries, in document order
pub fn tei_to_entries(xml: &str) -> TeiResult<Vec<BibEntry>> {
    let root = xml::parse_document(xml)?;
    let entries: Vec<BibEntry> = extract_references(&root)
        .iter()
        .map(TeiReference::to_bib_entry)
        .collect();
    tracing::debug!(entries = entries.len(), "Extracted bibliography entries");
    Ok(entries)
}

/// Convert TEI XML text to BibTeX
pub fn tei_to_bibtex(xml: &str) -> TeiResult<String> {
    Ok(format_entries(&tei_to_entries(xml)?))
}

/// Convert a TEI file and write the BibTeX to `output`
///
/// Returns the number of entries written.
pub fn convert_file(input: &Path, output: &Path) -> TeiResult<usize> {
    let xml = std::fs::read_to_string(input).map_err(|source| TeiError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let entries = tei_to_entries(&xml)?;

    std::fs::write(output, format_entries(&entries)).map_err(|source| TeiError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(entries.len())
}
