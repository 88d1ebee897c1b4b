//! Person-roster loading.
//!
//! The roster is the vendor's consumer file restricted to the columns the
//! pipeline needs: an ethnicity subcode plus the surname/geography schema
//! the external predictor requires (`surname`, `state`, `CD`, `county`,
//! `tract`). Records are loaded once and never mutated afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use bisg_model::{Geography, PersonRecord, Result};

use crate::table::read_csv_table;

/// Column conventions for the roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterOptions {
    /// Name of the ethnicity-subcode column.
    pub subcode_column: String,
    /// Optional explicit id column; row numbers are used when absent.
    pub id_column: Option<String>,
}

impl Default for RosterOptions {
    fn default() -> Self {
        Self {
            subcode_column: "ethnic_code".to_string(),
            id_column: None,
        }
    }
}

/// Columns required by the external predictor's schema.
const GEOGRAPHY_COLUMNS: [&str; 4] = ["state", "CD", "county", "tract"];

/// Load the person roster from a CSV file.
///
/// Empty subcode and surname cells become `None`; whether an empty subcode
/// means "genuinely unknown" or "a known code the exporter swallowed" is
/// the resolver's decision, not this loader's.
///
/// # Errors
///
/// Fails with `MissingColumn` when the subcode column, `surname`, or any of
/// the geography columns is absent.
pub fn load_roster(path: &Path, options: &RosterOptions) -> Result<Vec<PersonRecord>> {
    let table_name = path.display().to_string();
    let table = read_csv_table(path)?;

    let subcode_idx = table.require_column(&table_name, &options.subcode_column)?;
    let surname_idx = table.require_column(&table_name, "surname")?;
    let state_idx = table.require_column(&table_name, GEOGRAPHY_COLUMNS[0])?;
    let cd_idx = table.require_column(&table_name, GEOGRAPHY_COLUMNS[1])?;
    let county_idx = table.require_column(&table_name, GEOGRAPHY_COLUMNS[2])?;
    let tract_idx = table.require_column(&table_name, GEOGRAPHY_COLUMNS[3])?;
    let id_idx = match &options.id_column {
        Some(column) => Some(table.require_column(&table_name, column)?),
        None => None,
    };

    let cell = |row: &[String], idx: usize| -> String {
        row.get(idx).cloned().unwrap_or_default()
    };
    let optional = |row: &[String], idx: usize| -> Option<String> {
        let value = cell(row, idx);
        if value.is_empty() { None } else { Some(value) }
    };

    let mut records = Vec::with_capacity(table.rows.len());
    for (row_number, row) in table.rows.iter().enumerate() {
        let id = match id_idx {
            Some(idx) => cell(row, idx),
            None => (row_number + 1).to_string(),
        };
        records.push(PersonRecord {
            id,
            subcode: optional(row, subcode_idx),
            surname: optional(row, surname_idx),
            geography: Geography {
                state: cell(row, state_idx),
                cd: cell(row, cd_idx),
                county: cell(row, county_idx),
                tract: cell(row, tract_idx),
            },
        });
    }
    debug!(records = records.len(), table = %table_name, "roster loaded");
    Ok(records)
}
