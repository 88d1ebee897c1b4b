//! The classify pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Load the code map, the roster, and the geography cache
//! 2. **Resolve**: Produce a baseline race label for every record
//! 3. **Predict**: One synchronous call to the external predictor per batch
//! 4. **Reduce**: Arg-max each posterior into a predicted label
//! 5. **Report**: Frequency and confusion tables; optional per-record CSV
//!
//! Each stage returns a new value; nothing upstream is mutated. Any stage
//! failure aborts the whole batch — a partially labeled demographic file is
//! worse than no file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use bisg_classify::{CodeResolver, ResolverOptions, reduce};
use bisg_ingest::{RosterOptions, load_code_map, load_roster};
use bisg_model::{BisgError, ClassificationResult, CodeMap, PersonRecord, RaceLabel};
use bisg_predict::{GeoBundleSet, GeographyLevel, RacePredictor, load_geo_bundles};
use bisg_report::ClassificationReport;

use crate::logging::redact_value;
use crate::types::ClassifyRunResult;

/// Inputs and conventions for one classify run.
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    pub roster: PathBuf,
    pub code_map: PathBuf,
    pub geo_cache: Option<PathBuf>,
    pub geo_level: GeographyLevel,
    pub roster_options: RosterOptions,
    pub resolver_options: ResolverOptions,
    pub output: Option<PathBuf>,
}

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    pub code_map: CodeMap,
    pub records: Vec<PersonRecord>,
    pub geography: GeoBundleSet,
}

/// Load all inputs. The code map and geography cache are read once and
/// immutable for the rest of the run.
pub fn ingest(config: &ClassifyConfig) -> Result<IngestResult> {
    let span = info_span!("ingest");
    let _guard = span.enter();
    let code_map = load_code_map(&config.code_map).context("load code map")?;
    let records = load_roster(&config.roster, &config.roster_options).context("load roster")?;
    let geography = match &config.geo_cache {
        Some(path) => load_geo_bundles(path).context("load geography cache")?,
        None => GeoBundleSet::default(),
    };
    info!(
        codes = code_map.len(),
        records = records.len(),
        states = geography.len(),
        "inputs loaded"
    );
    Ok(IngestResult {
        code_map,
        records,
        geography,
    })
}

/// Resolve baseline labels for every record, in input order.
pub fn resolve_baselines(
    code_map: &CodeMap,
    options: &ResolverOptions,
    records: &[PersonRecord],
) -> Vec<RaceLabel> {
    let span = info_span!("resolve");
    let _guard = span.enter();
    let resolver = CodeResolver::with_options(code_map.clone(), options.clone());
    resolver.resolve_all(records)
}

/// Call the external predictor once for the batch and reduce each posterior.
///
/// Output order and cardinality must mirror the input batch; a predictor
/// that drops or duplicates records is an external-service failure, not
/// something to realign silently.
pub fn predict_and_reduce(
    predictor: &dyn RacePredictor,
    records: &[PersonRecord],
    baselines: &[RaceLabel],
    level: GeographyLevel,
    geography: &GeoBundleSet,
) -> Result<Vec<ClassificationResult>> {
    let span = info_span!("predict");
    let _guard = span.enter();
    let posteriors = predictor.predict(records, level, geography)?;
    if posteriors.len() != records.len() {
        return Err(BisgError::ExternalService(format!(
            "predictor returned {} posteriors for {} records",
            posteriors.len(),
            records.len()
        ))
        .into());
    }

    let mut results = Vec::with_capacity(records.len());
    let mut ties = 0usize;
    for ((record, baseline), posterior) in records.iter().zip(baselines).zip(posteriors) {
        let reduction = reduce(&posterior);
        if reduction.was_tie() {
            ties += 1;
        }
        trace!(
            id = %record.id,
            surname = redact_value(record.surname.as_deref().unwrap_or("")),
            baseline = %baseline,
            predicted = %reduction.label,
            "record classified"
        );
        results.push(ClassificationResult {
            record_id: record.id.clone(),
            baseline: *baseline,
            reduction,
            posterior,
        });
    }
    info!(records = results.len(), ties, "posteriors reduced");
    Ok(results)
}

/// Write the per-record side table: both labelings plus the raw posteriors.
pub fn write_results(path: &Path, results: &[ClassificationResult]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record([
            "id",
            "baseline",
            "predicted",
            "tied",
            "pred.whi",
            "pred.bla",
            "pred.his",
            "pred.asi",
            "pred.oth",
        ])
        .context("write results header")?;
    for result in results {
        let tied = result
            .reduction
            .tied
            .iter()
            .map(|label| label.as_str())
            .collect::<Vec<_>>()
            .join(";");
        let values = result.posterior.values();
        let mut row = vec![
            result.record_id.clone(),
            result.baseline.as_str().to_string(),
            result.reduction.label.as_str().to_string(),
            tied,
        ];
        row.extend(values.iter().map(|value| value.to_string()));
        writer.write_record(&row).context("write results row")?;
    }
    writer.flush().context("flush results")?;
    Ok(())
}

/// Run the whole pipeline with the given predictor.
pub fn run(config: &ClassifyConfig, predictor: &dyn RacePredictor) -> Result<ClassifyRunResult> {
    let ingested = ingest(config)?;
    let baselines = resolve_baselines(
        &ingested.code_map,
        &config.resolver_options,
        &ingested.records,
    );
    let results = predict_and_reduce(
        predictor,
        &ingested.records,
        &baselines,
        config.geo_level,
        &ingested.geography,
    )?;
    let report = ClassificationReport::from_results(&results);
    if let Some(path) = &config.output {
        write_results(path, &results)?;
        info!(output = %path.display(), "results written");
    }
    Ok(ClassifyRunResult {
        records: results.len(),
        report,
        output: config.output.clone(),
    })
}
