//! Shared CSV reading helpers.
//!
//! Source files arrive from spreadsheet exports with BOM prefixes and
//! padded headers; cells are normalized once here and nowhere else so the
//! resolver's exact-match contract stays meaningful.

use std::path::Path;

use bisg_model::{BisgError, Result};

/// Normalize a header: strip BOM, collapse interior runs of whitespace.
pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Normalize a data cell: strip BOM and surrounding whitespace, one pass.
pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// A fully-read CSV table with normalized headers and cells.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of the column with the given name, matched case-insensitively
    /// against the normalized headers.
    pub fn column(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_uppercase();
        self.headers
            .iter()
            .position(|header| header.to_uppercase() == wanted)
    }

    /// Like [`CsvTable::column`] but fails with a `MissingColumn` error
    /// naming the table.
    pub fn require_column(&self, table: &str, name: &str) -> Result<usize> {
        self.column(name).ok_or_else(|| BisgError::MissingColumn {
            table: table.to_string(),
            column: name.to_string(),
        })
    }
}

/// Read a whole CSV file into memory with headers and cells normalized.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| BisgError::Message(format!("{}: {error}", path.display())))?;
    let headers = reader
        .headers()
        .map_err(|error| BisgError::Message(format!("{}: {error}", path.display())))?
        .iter()
        .map(normalize_header)
        .collect::<Vec<_>>();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|error| BisgError::Message(format!("{}: {error}", path.display())))?;
        rows.push(record.iter().map(normalize_cell).collect());
    }
    Ok(CsvTable { headers, rows })
}
