//! Deterministic subcode-to-race resolution.
//!
//! The resolver applies the vendor code map to every record, producing the
//! baseline labeling. It mutates nothing: the code map and the records are
//! read-only, and the labels come back as a parallel vector in input order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use bisg_model::{CodeMap, PersonRecord, RaceLabel};

/// Missing-subcode policy for the resolver.
///
/// Vendor exports overload their sentinels: one known two-letter code has
/// the same literal text as the exporter's missing-value marker, so by the
/// time the roster reaches us that code has been swallowed into "absent".
/// `missing_override` is the caller's explicit statement that an absent
/// subcode means that literal text. Without it, absent stays absent and
/// resolves to Unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverOptions {
    /// Literal subcode text an absent field is restored to before lookup.
    pub missing_override: Option<String>,
    /// Reserved vendor code meaning genuinely unknown; resolves straight to
    /// Unknown without a map lookup.
    pub missing_sentinel: Option<String>,
}

/// Applies a [`CodeMap`] to person records.
#[derive(Debug, Clone)]
pub struct CodeResolver {
    map: CodeMap,
    options: ResolverOptions,
}

impl CodeResolver {
    pub fn new(map: CodeMap) -> Self {
        Self {
            map,
            options: ResolverOptions::default(),
        }
    }

    pub fn with_options(map: CodeMap, options: ResolverOptions) -> Self {
        Self { map, options }
    }

    /// Resolve one record's baseline race label.
    ///
    /// Lookup is exact and case-sensitive; the only normalization is the
    /// single trim pass already applied at ingest. An unmatched or absent
    /// subcode resolves to [`RaceLabel::Unknown`] — never an error, never a
    /// default guess.
    pub fn resolve(&self, record: &PersonRecord) -> RaceLabel {
        let subcode = match record.subcode.as_deref() {
            Some(code) => code,
            None => match self.options.missing_override.as_deref() {
                Some(restored) => restored,
                None => return RaceLabel::Unknown,
            },
        };
        if self
            .options
            .missing_sentinel
            .as_deref()
            .is_some_and(|sentinel| sentinel == subcode)
        {
            return RaceLabel::Unknown;
        }
        self.map.get(subcode).unwrap_or(RaceLabel::Unknown)
    }

    /// Resolve a whole batch, preserving input order and cardinality.
    pub fn resolve_all(&self, records: &[PersonRecord]) -> Vec<RaceLabel> {
        let labels: Vec<RaceLabel> = records.iter().map(|record| self.resolve(record)).collect();
        let unknown = labels
            .iter()
            .filter(|label| **label == RaceLabel::Unknown)
            .count();
        debug!(records = records.len(), unknown, "baseline labels resolved");
        labels
    }
}
