//! End-to-end tests for the classify pipeline.

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use bisg_classify::ResolverOptions;
use bisg_cli::pipeline::{ClassifyConfig, run};
use bisg_ingest::RosterOptions;
use bisg_model::{CollapsedRace, RaceLabel};
use bisg_predict::{GeographyLevel, PosteriorFilePredictor};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create file");
    file.write_all(contents.as_bytes()).expect("write file");
    path
}

fn config(dir: &TempDir, roster: PathBuf, code_map: PathBuf) -> ClassifyConfig {
    ClassifyConfig {
        roster,
        code_map,
        geo_cache: None,
        geo_level: GeographyLevel::Tract,
        roster_options: RosterOptions::default(),
        resolver_options: ResolverOptions::default(),
        output: Some(dir.path().join("results.csv")),
    }
}

#[test]
fn classifies_three_record_roster() {
    let dir = TempDir::new().expect("temp dir");
    let code_map = write_file(&dir, "codes.csv", "subcode,race\nA,A\nB,B\nW,W\n");
    let roster = write_file(
        &dir,
        "roster.csv",
        "ethnic_code,surname,state,CD,county,tract\n\
         A,WONG,06,12,075,061500\n\
         B,WILLIAMS,06,12,075,061500\n\
         ZZ,SMITH,06,12,075,061500\n",
    );
    let posteriors = write_file(
        &dir,
        "posteriors.csv",
        "pred.whi,pred.bla,pred.his,pred.asi,pred.oth\n\
         0.9,0.05,0.03,0.02,0.0\n\
         0.1,0.8,0.05,0.05,0.0\n\
         0.2,0.2,0.2,0.2,0.2\n",
    );

    let predictor = PosteriorFilePredictor::load(&posteriors).expect("load posteriors");
    let result = run(&config(&dir, roster, code_map), &predictor).expect("run pipeline");

    assert_eq!(result.records, 3);
    // Baseline: A -> Asian, B -> Black, ZZ unmatched -> Unknown.
    assert_eq!(result.report.baseline.get(&RaceLabel::Asian), Some(&1));
    assert_eq!(result.report.baseline.get(&RaceLabel::Black), Some(&1));
    assert_eq!(result.report.baseline.get(&RaceLabel::Unknown), Some(&1));
    // Predicted: argmax picks White, Black, and (uniform tie) White.
    assert_eq!(result.report.predicted.get(&CollapsedRace::White), Some(&2));
    assert_eq!(result.report.predicted.get(&CollapsedRace::Black), Some(&1));
    assert_eq!(result.report.tie_breaks, 1);
    // Count invariant: both labelings cover every record exactly once.
    assert_eq!(result.report.baseline_total(), 3);
    assert_eq!(result.report.predicted_total(), 3);
    // The unknown baseline collapses to Other; its tie-break winner is White.
    assert_eq!(
        result
            .report
            .confusion
            .cell(CollapsedRace::Other, CollapsedRace::White),
        1
    );

    let results_csv =
        std::fs::read_to_string(dir.path().join("results.csv")).expect("read results");
    let mut lines = results_csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,baseline,predicted,tied,pred.whi,pred.bla,pred.his,pred.asi,pred.oth"
    );
    assert!(lines.next().unwrap().starts_with("1,Asian,White,,"));
    assert!(lines.next().unwrap().starts_with("2,Black,Black,,"));
    let tied_row = lines.next().unwrap();
    assert!(tied_row.starts_with("3,Unknown,White,"));
    assert!(tied_row.contains("White;Black;Hispanic;Asian;Other"));
}

#[test]
fn missing_override_restores_collided_code() {
    let dir = TempDir::new().expect("temp dir");
    let code_map = write_file(&dir, "codes.csv", "subcode,race\nNA,B\nCH,A\n");
    // The second record's subcode cell is empty: the exporter swallowed a
    // literal "NA" into its missing marker.
    let roster = write_file(
        &dir,
        "roster.csv",
        "ethnic_code,surname,state,CD,county,tract\n\
         CH,WONG,06,12,075,061500\n\
         ,OKAFOR,06,12,075,061500\n",
    );
    let posteriors = write_file(
        &dir,
        "posteriors.csv",
        "pred.whi,pred.bla,pred.his,pred.asi,pred.oth\n\
         0.05,0.02,0.03,0.85,0.05\n\
         0.1,0.75,0.05,0.05,0.05\n",
    );

    let mut config = config(&dir, roster, code_map);
    config.resolver_options.missing_override = Some("NA".to_string());
    config.output = None;
    let predictor = PosteriorFilePredictor::load(&posteriors).expect("load posteriors");
    let result = run(&config, &predictor).expect("run pipeline");

    // With the override, absence means the literal "NA" and resolves to
    // Black instead of Unknown.
    assert_eq!(result.report.baseline.get(&RaceLabel::Black), Some(&1));
    assert_eq!(result.report.baseline.get(&RaceLabel::Unknown), None);
}

#[test]
fn posterior_cardinality_mismatch_aborts_the_batch() {
    let dir = TempDir::new().expect("temp dir");
    let code_map = write_file(&dir, "codes.csv", "subcode,race\nA,A\n");
    let roster = write_file(
        &dir,
        "roster.csv",
        "ethnic_code,surname,state,CD,county,tract\n\
         A,WONG,06,12,075,061500\n\
         A,CHEN,06,12,075,061500\n",
    );
    let posteriors = write_file(
        &dir,
        "posteriors.csv",
        "pred.whi,pred.bla,pred.his,pred.asi,pred.oth\n0.2,0.2,0.2,0.2,0.2\n",
    );

    let predictor = PosteriorFilePredictor::load(&posteriors).expect("load posteriors");
    let error = run(&config(&dir, roster, code_map), &predictor).unwrap_err();
    assert!(error.to_string().contains("external predictor failed"));
}

#[test]
fn ambiguous_code_map_aborts_before_prediction() {
    let dir = TempDir::new().expect("temp dir");
    let code_map = write_file(&dir, "codes.csv", "subcode,race\nCH,A\nCH,W\n");
    let roster = write_file(
        &dir,
        "roster.csv",
        "ethnic_code,surname,state,CD,county,tract\nCH,WONG,06,12,075,061500\n",
    );
    let posteriors = write_file(
        &dir,
        "posteriors.csv",
        "pred.whi,pred.bla,pred.his,pred.asi,pred.oth\n0.2,0.2,0.2,0.2,0.2\n",
    );

    let predictor = PosteriorFilePredictor::load(&posteriors).expect("load posteriors");
    let error = run(&config(&dir, roster, code_map), &predictor).unwrap_err();
    let chain = format!("{error:#}");
    assert!(chain.contains("configuration error"), "got: {chain}");
}
