//! Posterior reduction: one validated posterior vector in, one label out.

use bisg_model::{CollapsedRace, PosteriorVector, Reduction, Result};

/// Tie-break priority over the collapsed label set, highest first.
///
/// This matches the posterior column order, but the reduction is defined in
/// terms of this table rather than whatever order a scan happens to visit:
/// with degenerate inputs (uniform or all-but-one-zero posteriors) exact
/// floating-point ties do occur, and the winner must be deterministic.
pub const TIE_BREAK_PRIORITY: [CollapsedRace; 5] = [
    CollapsedRace::White,
    CollapsedRace::Black,
    CollapsedRace::Hispanic,
    CollapsedRace::Asian,
    CollapsedRace::Other,
];

/// Reduce a posterior vector to its most probable label.
///
/// The winner is the maximum entry; exact ties go to the label earliest in
/// [`TIE_BREAK_PRIORITY`]. The returned [`Reduction`] carries the raw
/// arg-max index and, when a tie occurred, every tied candidate so the
/// decision can be audited.
///
/// Degenerate vectors never reach this function: [`PosteriorVector`]
/// enforces arity, non-negativity, and the sum-to-one invariant at
/// construction.
pub fn reduce(posterior: &PosteriorVector) -> Reduction {
    let values = posterior.values();
    let mut max = f64::NEG_INFINITY;
    for value in values {
        if *value > max {
            max = *value;
        }
    }
    let mut tied: Vec<CollapsedRace> = Vec::new();
    for label in TIE_BREAK_PRIORITY {
        if values[label.index()] == max {
            tied.push(label);
        }
    }
    // tied is non-empty: the maximum is always attained at least once.
    let label = tied[0];
    let argmax = label.index();
    if tied.len() == 1 {
        tied.clear();
    }
    Reduction {
        label,
        argmax,
        tied,
    }
}

/// Validate raw probabilities and reduce them in one step.
///
/// # Errors
///
/// Fails with `InvalidPosterior` when the slice has the wrong arity,
/// contains a negative entry, or does not sum to 1 within tolerance.
pub fn reduce_raw(values: &[f64]) -> Result<Reduction> {
    let posterior = PosteriorVector::from_slice(values)?;
    Ok(reduce(&posterior))
}
