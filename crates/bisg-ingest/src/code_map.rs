//! Vendor code-map loading.
//!
//! The code map is a small tabular file with `subcode` and `race` columns,
//! loaded once per run and read-only thereafter. Ambiguity is a hard
//! configuration failure detected here, at load time, never resolved by
//! "first match wins" downstream.

use std::path::Path;

use tracing::warn;

use bisg_model::{BisgError, CodeMap, RaceLabel, Result};

use crate::table::read_csv_table;

/// Load a code map from a CSV file with `subcode` and `race` columns.
///
/// # Errors
///
/// Fails with `MissingColumn` when either column is absent and with
/// `Configuration` on empty subcodes, unknown race codes, or a subcode
/// mapped to two different races. Benign exact-duplicate rows are logged
/// and deduplicated.
pub fn load_code_map(path: &Path) -> Result<CodeMap> {
    let table_name = path.display().to_string();
    let table = read_csv_table(path)?;
    let subcode_idx = table.require_column(&table_name, "subcode")?;
    let race_idx = table.require_column(&table_name, "race")?;

    let mut entries = Vec::with_capacity(table.rows.len());
    for (row_number, row) in table.rows.iter().enumerate() {
        // Header is line 1; data starts on line 2.
        let line = row_number + 2;
        let subcode = row.get(subcode_idx).map(String::as_str).unwrap_or("");
        if subcode.is_empty() {
            return Err(BisgError::Configuration(format!(
                "{table_name}:{line}: empty subcode"
            )));
        }
        let race_code = row.get(race_idx).map(String::as_str).unwrap_or("");
        let race = race_code
            .parse::<RaceLabel>()
            .map_err(|message| BisgError::Configuration(format!("{table_name}:{line}: {message}")))?;
        entries.push((subcode.to_string(), race));
    }

    let loaded = entries.len();
    let map = CodeMap::from_entries(entries).map_err(|error| match error {
        BisgError::Configuration(message) => {
            BisgError::Configuration(format!("{table_name}: {message}"))
        }
        other => other,
    })?;
    if map.len() < loaded {
        warn!(
            table = %table_name,
            duplicates = loaded - map.len(),
            "duplicate code-map rows deduplicated"
        );
    }
    Ok(map)
}
