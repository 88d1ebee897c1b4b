use proptest::prelude::*;

use bisg_classify::{TIE_BREAK_PRIORITY, reduce};
use bisg_model::{CollapsedRace, PosteriorVector};

/// Strategy: five non-negative weights with at least some mass, normalized
/// onto the probability simplex.
fn posteriors() -> impl Strategy<Value = PosteriorVector> {
    prop::array::uniform5(0.0f64..1.0)
        .prop_filter("needs positive mass", |weights| {
            weights.iter().sum::<f64>() > 1e-3
        })
        .prop_map(|weights| {
            let sum: f64 = weights.iter().sum();
            let normalized = weights.map(|w| w / sum);
            PosteriorVector::from_slice(&normalized).expect("normalized weights are valid")
        })
}

proptest! {
    #[test]
    fn reduction_picks_a_maximum_entry(posterior in posteriors()) {
        let reduction = reduce(&posterior);
        let values = posterior.values();
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(values[reduction.argmax], max);
        prop_assert_eq!(reduction.label.index(), reduction.argmax);
    }

    #[test]
    fn no_other_tied_label_outranks_the_winner(posterior in posteriors()) {
        let reduction = reduce(&posterior);
        let values = posterior.values();
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        for label in TIE_BREAK_PRIORITY {
            if values[label.index()] == max {
                // First label at the maximum, in priority order, must be the winner.
                prop_assert_eq!(label, reduction.label);
                break;
            }
        }
    }

    #[test]
    fn tie_set_is_empty_or_contains_winner(posterior in posteriors()) {
        let reduction = reduce(&posterior);
        if reduction.was_tie() {
            prop_assert!(reduction.tied.len() >= 2);
            prop_assert!(reduction.tied.contains(&reduction.label));
        }
    }
}

#[test]
fn priority_order_is_white_first() {
    assert_eq!(TIE_BREAK_PRIORITY[0], CollapsedRace::White);
    assert_eq!(TIE_BREAK_PRIORITY[4], CollapsedRace::Other);
}
