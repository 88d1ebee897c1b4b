//! The vendor subcode-to-race mapping table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{BisgError, Result};
use crate::labels::RaceLabel;

/// Immutable mapping from vendor ethnicity subcode to race label.
///
/// Built once per run, read-only thereafter. The mapping must be a pure
/// function: the same subcode appearing with two different races is
/// ambiguous and rejected at construction, never resolved by "first match
/// wins".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeMap {
    entries: BTreeMap<String, RaceLabel>,
}

impl CodeMap {
    /// Build a code map from (subcode, race) pairs.
    ///
    /// Exact duplicate pairs are deduplicated (callers can compare input
    /// length against [`CodeMap::len`] to flag them); a conflicting
    /// duplicate fails with [`BisgError::Configuration`].
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, RaceLabel)>,
    {
        let mut map = BTreeMap::new();
        for (subcode, race) in entries {
            match map.get(&subcode) {
                Some(existing) if *existing != race => {
                    return Err(BisgError::Configuration(format!(
                        "subcode `{subcode}` mapped to both {existing} and {race}"
                    )));
                }
                _ => {
                    map.insert(subcode, race);
                }
            }
        }
        Ok(Self { entries: map })
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, subcode: &str) -> Option<RaceLabel> {
        self.entries.get(subcode).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in stable subcode order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RaceLabel)> {
        self.entries.iter().map(|(code, race)| (code.as_str(), *race))
    }
}
