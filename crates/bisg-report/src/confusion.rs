//! Baseline × predicted contingency table.

use serde::{Deserialize, Serialize};

use bisg_model::{CollapsedRace, RaceLabel};

/// Cross-tabulation of the two labelings over the collapsed taxonomy.
///
/// Rows are the collapsed baseline label, columns the predicted label, both
/// in posterior column order (White, Black, Hispanic, Asian, Other). The
/// 8-value baseline goes through the fixed collapse table so the grid is
/// square and the two marginals are comparable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionTable {
    cells: [[usize; 5]; 5],
}

impl ConfusionTable {
    /// Count one record.
    pub fn record(&mut self, baseline: RaceLabel, predicted: CollapsedRace) {
        self.cells[baseline.collapse().index()][predicted.index()] += 1;
    }

    /// Count for one (baseline, predicted) cell.
    pub fn cell(&self, baseline: CollapsedRace, predicted: CollapsedRace) -> usize {
        self.cells[baseline.index()][predicted.index()]
    }

    /// Row total for a collapsed baseline label.
    pub fn baseline_total(&self, baseline: CollapsedRace) -> usize {
        self.cells[baseline.index()].iter().sum()
    }

    /// Column total for a predicted label.
    pub fn predicted_total(&self, predicted: CollapsedRace) -> usize {
        self.cells.iter().map(|row| row[predicted.index()]).sum()
    }

    /// Grand total across all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// Records where the two labelings agree (the diagonal).
    pub fn agreement(&self) -> usize {
        CollapsedRace::ALL
            .iter()
            .map(|label| self.cell(*label, *label))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_land_in_collapsed_cells() {
        let mut table = ConfusionTable::default();
        table.record(RaceLabel::PacificIslander, CollapsedRace::Asian);
        table.record(RaceLabel::Unknown, CollapsedRace::White);
        table.record(RaceLabel::White, CollapsedRace::White);

        assert_eq!(table.cell(CollapsedRace::Asian, CollapsedRace::Asian), 1);
        assert_eq!(table.cell(CollapsedRace::Other, CollapsedRace::White), 1);
        assert_eq!(table.cell(CollapsedRace::White, CollapsedRace::White), 1);
        assert_eq!(table.total(), 3);
        assert_eq!(table.agreement(), 2);
    }

    #[test]
    fn marginals_sum_to_total() {
        let mut table = ConfusionTable::default();
        table.record(RaceLabel::Black, CollapsedRace::Black);
        table.record(RaceLabel::Black, CollapsedRace::White);
        table.record(RaceLabel::Hispanic, CollapsedRace::Hispanic);

        let row_sum: usize = CollapsedRace::ALL
            .iter()
            .map(|label| table.baseline_total(*label))
            .sum();
        let column_sum: usize = CollapsedRace::ALL
            .iter()
            .map(|label| table.predicted_total(*label))
            .sum();
        assert_eq!(row_sum, table.total());
        assert_eq!(column_sum, table.total());
    }
}
