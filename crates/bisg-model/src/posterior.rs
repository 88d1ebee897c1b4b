//! Validated posterior-probability vectors and their reductions.

use serde::{Deserialize, Serialize};

use crate::error::{BisgError, Result};
use crate::labels::CollapsedRace;

/// Tolerance for the sum-to-one invariant.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Class-posterior probabilities over the collapsed 5-label taxonomy.
///
/// Entries follow the fixed column order White, Black, Hispanic, Asian,
/// Other (see [`CollapsedRace::index`]). A vector is validated once at
/// construction and immutable afterwards: every entry is non-negative and
/// the five entries sum to 1 within [`SUM_TOLERANCE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 5]", into = "[f64; 5]")]
pub struct PosteriorVector([f64; 5]);

impl PosteriorVector {
    /// Build a validated posterior vector.
    ///
    /// # Errors
    ///
    /// Returns [`BisgError::InvalidPosterior`] when any entry is negative or
    /// non-finite, or when the entries do not sum to 1 within tolerance.
    pub fn new(values: [f64; 5]) -> Result<Self> {
        for (index, value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(BisgError::InvalidPosterior(format!(
                    "entry {index} is not finite: {value}"
                )));
            }
            if *value < 0.0 {
                return Err(BisgError::InvalidPosterior(format!(
                    "entry {index} is negative: {value}"
                )));
            }
        }
        let sum: f64 = values.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(BisgError::InvalidPosterior(format!(
                "entries sum to {sum}, expected 1 within {SUM_TOLERANCE}"
            )));
        }
        Ok(Self(values))
    }

    /// Build from a slice, enforcing the 5-entry arity.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let array: [f64; 5] = values.try_into().map_err(|_| {
            BisgError::InvalidPosterior(format!(
                "expected 5 entries, got {}",
                values.len()
            ))
        })?;
        Self::new(array)
    }

    /// Probability for the given collapsed label.
    pub fn probability(&self, label: CollapsedRace) -> f64 {
        self.0[label.index()]
    }

    /// All five probabilities in column order.
    pub fn values(&self) -> &[f64; 5] {
        &self.0
    }
}

impl TryFrom<[f64; 5]> for PosteriorVector {
    type Error = BisgError;

    fn try_from(values: [f64; 5]) -> Result<Self> {
        Self::new(values)
    }
}

impl From<PosteriorVector> for [f64; 5] {
    fn from(posterior: PosteriorVector) -> Self {
        posterior.0
    }
}

/// Outcome of reducing one posterior vector to a single label.
///
/// Keeps the raw arg-max index and the tied-candidate set so callers can
/// audit tie-break decisions after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduction {
    /// The winning label.
    pub label: CollapsedRace,
    /// Raw arg-max index into the posterior column order.
    pub argmax: usize,
    /// All labels whose probability equaled the maximum, in priority order.
    /// Empty when the maximum was unique.
    pub tied: Vec<CollapsedRace>,
}

impl Reduction {
    /// True when two or more entries tied for the maximum.
    pub fn was_tie(&self) -> bool {
        !self.tied.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_vector() {
        let posterior = PosteriorVector::new([0.9, 0.05, 0.03, 0.02, 0.0]).unwrap();
        assert_eq!(posterior.probability(CollapsedRace::White), 0.9);
        assert_eq!(posterior.probability(CollapsedRace::Other), 0.0);
    }

    #[test]
    fn rejects_short_sum() {
        let error = PosteriorVector::new([0.1, 0.1, 0.1, 0.1, 0.1]).unwrap_err();
        assert!(matches!(error, BisgError::InvalidPosterior(_)));
    }

    #[test]
    fn rejects_negative_entry() {
        let error = PosteriorVector::new([1.2, -0.2, 0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(error, BisgError::InvalidPosterior(_)));
    }

    #[test]
    fn rejects_wrong_arity() {
        let error = PosteriorVector::from_slice(&[0.5, 0.5]).unwrap_err();
        assert!(matches!(error, BisgError::InvalidPosterior(_)));
    }

    #[test]
    fn tolerates_float_rounding() {
        // 0.1 * 3 + 0.7 is not exactly 1.0 in binary floating point.
        let posterior = PosteriorVector::new([0.1, 0.1, 0.1, 0.7, 0.0]);
        assert!(posterior.is_ok());
    }

    #[test]
    fn deserialization_validates() {
        let good: std::result::Result<PosteriorVector, _> =
            serde_json::from_str("[0.2, 0.2, 0.2, 0.2, 0.2]");
        assert!(good.is_ok());
        let bad: std::result::Result<PosteriorVector, _> =
            serde_json::from_str("[0.2, 0.2, 0.2, 0.2, 0.9]");
        assert!(bad.is_err());
    }
}
