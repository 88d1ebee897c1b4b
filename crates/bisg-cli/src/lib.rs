//! CLI library components for the BISG race classifier.

pub mod logging;
pub mod pipeline;
pub mod types;
