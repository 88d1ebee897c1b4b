//! Pre-fetched reference-geography cache.
//!
//! The external predictor needs per-state Census reference tables. Fetching
//! them requires an authenticated Census API call, so runs are expected to
//! work from a pre-serialized local cache: a JSON object keyed by
//! two-letter state code whose values this pipeline treats as immutable
//! blobs and never inspects.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use bisg_model::{BisgError, Result};

/// Opaque per-state reference-geography blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoBundle {
    /// Two-letter state code (e.g. "CA").
    pub state: String,
    /// The pre-fetched payload, passed through to the predictor untouched.
    pub payload: serde_json::Value,
}

/// All loaded per-state bundles, keyed by two-letter state code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoBundleSet {
    bundles: BTreeMap<String, GeoBundle>,
}

impl GeoBundleSet {
    pub fn get(&self, state: &str) -> Option<&GeoBundle> {
        self.bundles.get(state)
    }

    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

/// Load a geography cache serialized as `{ "CA": {...}, "NY": {...} }`.
pub fn load_geo_bundles(path: &Path) -> Result<GeoBundleSet> {
    let file = File::open(path)?;
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_reader(BufReader::new(file))
        .map_err(|error| BisgError::Message(format!("{}: {error}", path.display())))?;
    let bundles = raw
        .into_iter()
        .map(|(state, payload)| {
            let bundle = GeoBundle {
                state: state.clone(),
                payload,
            };
            (state, bundle)
        })
        .collect::<BTreeMap<_, _>>();
    debug!(states = bundles.len(), cache = %path.display(), "geography cache loaded");
    Ok(GeoBundleSet { bundles })
}
