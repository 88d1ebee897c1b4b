use std::path::PathBuf;

use bisg_report::ClassificationReport;

/// Everything the summary printer needs about a finished classify run.
#[derive(Debug)]
pub struct ClassifyRunResult {
    pub records: usize,
    pub report: ClassificationReport,
    /// Per-record results CSV, when one was written.
    pub output: Option<PathBuf>,
}
