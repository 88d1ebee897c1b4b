//! Person records and their derived classification results.
//!
//! Input records are owned by the surrounding pipeline and never mutated;
//! derived labels live in a side table of [`ClassificationResult`] values
//! keyed by the same record identity.

use serde::{Deserialize, Serialize};

use crate::labels::RaceLabel;
use crate::posterior::{PosteriorVector, Reduction};

/// Geographic identifiers sufficient to key into the predictor's
/// reference-geography data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geography {
    /// 2-digit state FIPS code.
    pub state: String,
    /// Congressional district.
    pub cd: String,
    /// 3-digit county FIPS code.
    pub county: String,
    /// 6-digit census-tract code.
    pub tract: String,
}

/// One row of the person roster.
///
/// The subcode and surname fields are `None` when the source cell was empty
/// or carried the ingest missing-value marker; see the resolver's
/// missing-override handling for the code whose literal text collides with
/// that marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Stable record identifier (row number when the source has no id column).
    pub id: String,
    /// Vendor ethnicity subcode, finer-grained than the race taxonomy.
    pub subcode: Option<String>,
    /// Surname used by the external predictor.
    pub surname: Option<String>,
    /// Geography used by the external predictor.
    pub geography: Geography,
}

/// Derived labels for one record: the code-map baseline, the reduced
/// prediction, and the raw posterior it came from. Created once after both
/// components run; consumed only by reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub record_id: String,
    pub baseline: RaceLabel,
    pub reduction: Reduction,
    pub posterior: PosteriorVector,
}
