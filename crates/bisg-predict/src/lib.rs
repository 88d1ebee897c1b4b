//! Boundary to the external Bayesian surname-geocoding predictor.
//!
//! The statistical model is an external collaborator with a fixed contract:
//! it takes a record batch, a geography-level selector, and pre-fetched
//! reference geography, and returns one posterior vector per record with
//! input order and cardinality preserved. Nothing here reimplements or
//! retries it; a failure surfaces as a single terminal error for the batch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use bisg_model::{PersonRecord, PosteriorVector, Result};

pub mod file_predictor;
pub mod geo;

pub use file_predictor::{POSTERIOR_COLUMNS, PosteriorFilePredictor};
pub use geo::{GeoBundle, GeoBundleSet, load_geo_bundles};

/// Geographic resolution the predictor conditions on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeographyLevel {
    County,
    Tract,
    Block,
    Place,
}

impl GeographyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeographyLevel::County => "county",
            GeographyLevel::Tract => "tract",
            GeographyLevel::Block => "block",
            GeographyLevel::Place => "place",
        }
    }
}

impl fmt::Display for GeographyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GeographyLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "county" => Ok(GeographyLevel::County),
            "tract" => Ok(GeographyLevel::Tract),
            "block" => Ok(GeographyLevel::Block),
            "place" => Ok(GeographyLevel::Place),
            other => Err(format!("Unknown geography level: {other}")),
        }
    }
}

/// The external predictor contract.
///
/// Implementations must return exactly one posterior per input record, in
/// input order. The caller verifies cardinality and treats a violation as
/// an external-service failure.
pub trait RacePredictor {
    fn predict(
        &self,
        batch: &[PersonRecord],
        level: GeographyLevel,
        geography: &GeoBundleSet,
    ) -> Result<Vec<PosteriorVector>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geography_level_round_trip() {
        for level in [
            GeographyLevel::County,
            GeographyLevel::Tract,
            GeographyLevel::Block,
            GeographyLevel::Place,
        ] {
            assert_eq!(level.as_str().parse::<GeographyLevel>().unwrap(), level);
        }
        assert!("zip".parse::<GeographyLevel>().is_err());
    }
}
