use thiserror::Error;

/// Errors raised by the classification pipeline.
///
/// Every failure carries the identifier of the offending table, column, or
/// record so a run aborts with something actionable. The pipeline never
/// degrades to partial or best-effort labeling: a silently mislabeled
/// demographic field is worse than a hard stop.
#[derive(Debug, Error)]
pub enum BisgError {
    /// The code-map table is ambiguous or malformed (e.g. the same subcode
    /// mapped to two different races).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A posterior vector violated its invariant (wrong arity, negative
    /// entry, or probabilities not summing to 1).
    #[error("invalid posterior: {0}")]
    InvalidPosterior(String),

    /// A required column is absent from an input table.
    #[error("missing column `{column}` in {table}")]
    MissingColumn { table: String, column: String },

    /// Opaque failure surfaced unchanged from the external race predictor.
    #[error("external predictor failed: {0}")]
    ExternalService(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, BisgError>;
