//! Replay of posteriors pre-computed by the external statistical tool.
//!
//! The Bayesian surname-geocoding model itself lives outside this
//! repository; its output is a copy of the input batch augmented with five
//! posterior columns named `pred.whi`, `pred.bla`, `pred.his`, `pred.asi`,
//! `pred.oth`. This predictor reads such a file and serves the posteriors
//! row-for-row, which keeps runs reproducible without the external tool or
//! a Census API key on the machine.

use std::path::{Path, PathBuf};

use tracing::info;

use bisg_ingest::read_csv_table;
use bisg_model::{BisgError, PersonRecord, PosteriorVector, Result};

use crate::geo::GeoBundleSet;
use crate::{GeographyLevel, RacePredictor};

/// Posterior column names in the external tool's output, in label order.
pub const POSTERIOR_COLUMNS: [&str; 5] =
    ["pred.whi", "pred.bla", "pred.his", "pred.asi", "pred.oth"];

/// File-backed [`RacePredictor`] serving pre-computed posteriors.
#[derive(Debug, Clone)]
pub struct PosteriorFilePredictor {
    source: PathBuf,
    posteriors: Vec<PosteriorVector>,
}

impl PosteriorFilePredictor {
    /// Load the external tool's output file.
    ///
    /// Anything malformed in it — missing posterior columns, unparseable or
    /// invariant-violating probabilities — is the collaborator's failure
    /// and surfaces as [`BisgError::ExternalService`].
    pub fn load(path: &Path) -> Result<Self> {
        let table_name = path.display().to_string();
        let table = read_csv_table(path)?;
        let mut columns = [0usize; 5];
        for (slot, name) in columns.iter_mut().zip(POSTERIOR_COLUMNS) {
            *slot = table
                .column(name)
                .ok_or_else(|| BisgError::MissingColumn {
                    table: table_name.clone(),
                    column: name.to_string(),
                })?;
        }

        let mut posteriors = Vec::with_capacity(table.rows.len());
        for (row_number, row) in table.rows.iter().enumerate() {
            let line = row_number + 2;
            let mut values = [0.0f64; 5];
            for (value, index) in values.iter_mut().zip(columns) {
                let raw = row.get(index).map(String::as_str).unwrap_or("");
                *value = raw.parse::<f64>().map_err(|_| {
                    BisgError::ExternalService(format!(
                        "{table_name}:{line}: unparseable posterior `{raw}`"
                    ))
                })?;
            }
            let posterior = PosteriorVector::new(values).map_err(|error| {
                BisgError::ExternalService(format!("{table_name}:{line}: {error}"))
            })?;
            posteriors.push(posterior);
        }
        info!(rows = posteriors.len(), source = %table_name, "posterior file loaded");
        Ok(Self {
            source: path.to_path_buf(),
            posteriors,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl RacePredictor for PosteriorFilePredictor {
    fn predict(
        &self,
        batch: &[PersonRecord],
        _level: GeographyLevel,
        _geography: &GeoBundleSet,
    ) -> Result<Vec<PosteriorVector>> {
        // Row order in the external output must mirror the input batch.
        if self.posteriors.len() != batch.len() {
            return Err(BisgError::ExternalService(format!(
                "{}: {} posterior rows for a batch of {} records",
                self.source.display(),
                self.posteriors.len(),
                batch.len()
            )));
        }
        Ok(self.posteriors.clone())
    }
}
