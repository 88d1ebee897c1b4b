//! Frequency tables over the two labelings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use bisg_model::{ClassificationResult, CollapsedRace, RaceLabel};

use crate::confusion::ConfusionTable;

/// All aggregations over a finished batch of classification results.
///
/// Pure counting with stable iteration order; building the report consumes
/// nothing and mutates nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Baseline (code-map) label counts over the full 8-value taxonomy.
    pub baseline: BTreeMap<RaceLabel, usize>,
    /// Predicted label counts over the collapsed taxonomy.
    pub predicted: BTreeMap<CollapsedRace, usize>,
    /// Collapsed baseline × predicted contingency table.
    pub confusion: ConfusionTable,
    /// Number of records aggregated.
    pub total: usize,
    /// Records whose reduction involved a tie-break.
    pub tie_breaks: usize,
}

impl ClassificationReport {
    pub fn from_results(results: &[ClassificationResult]) -> Self {
        let mut report = Self::default();
        for result in results {
            *report.baseline.entry(result.baseline).or_default() += 1;
            *report.predicted.entry(result.reduction.label).or_default() += 1;
            report.confusion.record(result.baseline, result.reduction.label);
            if result.reduction.was_tie() {
                report.tie_breaks += 1;
            }
            report.total += 1;
        }
        report
    }

    /// Sum of the baseline frequency table.
    pub fn baseline_total(&self) -> usize {
        self.baseline.values().sum()
    }

    /// Sum of the predicted frequency table.
    pub fn predicted_total(&self) -> usize {
        self.predicted.values().sum()
    }
}
