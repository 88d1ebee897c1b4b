use bisg_model::{
    ClassificationResult, CollapsedRace, PosteriorVector, RaceLabel, Reduction,
};
use bisg_report::ClassificationReport;

fn result(
    id: &str,
    baseline: RaceLabel,
    predicted: CollapsedRace,
    tied: Vec<CollapsedRace>,
) -> ClassificationResult {
    let mut values = [0.0f64; 5];
    values[predicted.index()] = 1.0;
    ClassificationResult {
        record_id: id.to_string(),
        baseline,
        reduction: Reduction {
            label: predicted,
            argmax: predicted.index(),
            tied,
        },
        posterior: PosteriorVector::new(values).unwrap(),
    }
}

#[test]
fn report_covers_both_labelings_and_ties() {
    let uniform_tie = CollapsedRace::ALL.to_vec();
    let results = vec![
        result("1", RaceLabel::Asian, CollapsedRace::Asian, vec![]),
        result("2", RaceLabel::Black, CollapsedRace::Black, vec![]),
        result("3", RaceLabel::Unknown, CollapsedRace::White, uniform_tie),
    ];
    let report = ClassificationReport::from_results(&results);

    assert_eq!(report.total, 3);
    assert_eq!(report.tie_breaks, 1);
    assert_eq!(report.baseline.get(&RaceLabel::Unknown), Some(&1));
    assert_eq!(report.predicted.get(&CollapsedRace::White), Some(&1));
    // The unknown baseline collapses to Other; its tie-break winner was White.
    assert_eq!(
        report.confusion.cell(CollapsedRace::Other, CollapsedRace::White),
        1
    );
    assert_eq!(report.confusion.agreement(), 2);
}

#[test]
fn report_serializes() {
    let results = vec![result("1", RaceLabel::White, CollapsedRace::White, vec![])];
    let report = ClassificationReport::from_results(&results);
    let json = serde_json::to_string(&report).expect("serialize report");
    let round: ClassificationReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round, report);
}
