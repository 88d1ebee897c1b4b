//! CLI argument definitions for the BISG classifier.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bisg",
    version,
    about = "BISG race classifier - label records by vendor code and surname geocoding",
    long_about = "Assign race/ethnicity labels to a consumer roster two ways:\n\n\
                  a deterministic lookup from the vendor's two-letter ethnicity code,\n\
                  and a Bayesian surname/geography prediction replayed from the\n\
                  external statistical tool's output. Both labelings are retained\n\
                  and cross-tabulated."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow surnames and subcodes in trace output.
    ///
    /// Row-level values are personal data and are redacted from logs by
    /// default.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify a roster and report both labelings.
    Classify(ClassifyArgs),

    /// List the race taxonomy and the collapse policy.
    Labels,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Roster CSV with subcode, surname, and geography columns.
    #[arg(value_name = "ROSTER")]
    pub roster: PathBuf,

    /// Code-map CSV with `subcode` and `race` columns.
    #[arg(long = "code-map", value_name = "PATH")]
    pub code_map: PathBuf,

    /// External predictor output CSV with pred.* posterior columns,
    /// row-aligned with the roster.
    #[arg(long = "posteriors", value_name = "PATH")]
    pub posteriors: PathBuf,

    /// Pre-fetched reference-geography cache (JSON keyed by state code).
    #[arg(long = "geo-cache", value_name = "PATH")]
    pub geo_cache: Option<PathBuf>,

    /// Geographic resolution the predictor conditioned on.
    #[arg(long = "geo-level", value_enum, default_value = "tract")]
    pub geo_level: GeoLevelArg,

    /// Name of the roster's ethnicity-subcode column.
    #[arg(long = "subcode-column", value_name = "NAME", default_value = "ethnic_code")]
    pub subcode_column: String,

    /// Name of the roster's record-id column (row numbers when omitted).
    #[arg(long = "id-column", value_name = "NAME")]
    pub id_column: Option<String>,

    /// Literal subcode an empty subcode cell stands for.
    ///
    /// Vendor files use codes whose text collides with CSV missing-value
    /// markers (e.g. "NA"); exporters swallow them into empty cells. This
    /// flag restores the literal before lookup.
    #[arg(long = "missing-means", value_name = "CODE")]
    pub missing_means: Option<String>,

    /// Reserved vendor code meaning genuinely unknown.
    #[arg(long = "unknown-code", value_name = "CODE")]
    pub unknown_code: Option<String>,

    /// Write per-record results (both labelings plus posteriors) to a CSV.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GeoLevelArg {
    County,
    Tract,
    Block,
    Place,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
