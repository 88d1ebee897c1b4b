use anyhow::{Context, Result};
use comfy_table::Table;

use bisg_classify::ResolverOptions;
use bisg_ingest::RosterOptions;
use bisg_model::RaceLabel;
use bisg_predict::{GeographyLevel, PosteriorFilePredictor};

use bisg_cli::pipeline::{ClassifyConfig, run};
use bisg_cli::types::ClassifyRunResult;

use crate::cli::{ClassifyArgs, GeoLevelArg};
use crate::summary::apply_table_style;

pub fn run_classify(args: &ClassifyArgs) -> Result<ClassifyRunResult> {
    let config = ClassifyConfig {
        roster: args.roster.clone(),
        code_map: args.code_map.clone(),
        geo_cache: args.geo_cache.clone(),
        geo_level: geo_level(args.geo_level),
        roster_options: RosterOptions {
            subcode_column: args.subcode_column.clone(),
            id_column: args.id_column.clone(),
        },
        resolver_options: ResolverOptions {
            missing_override: args.missing_means.clone(),
            missing_sentinel: args.unknown_code.clone(),
        },
        output: args.output.clone(),
    };
    let predictor =
        PosteriorFilePredictor::load(&args.posteriors).context("load posterior file")?;
    run(&config, &predictor)
}

pub fn run_labels() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Label", "Collapses to"]);
    apply_table_style(&mut table);
    for label in RaceLabel::ALL {
        table.add_row(vec![
            label.as_code().to_string(),
            label.as_str().to_string(),
            label.collapse().as_str().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn geo_level(arg: GeoLevelArg) -> GeographyLevel {
    match arg {
        GeoLevelArg::County => GeographyLevel::County,
        GeoLevelArg::Tract => GeographyLevel::Tract,
        GeoLevelArg::Block => GeographyLevel::Block,
        GeoLevelArg::Place => GeographyLevel::Place,
    }
}
