pub mod code_map;
pub mod error;
pub mod labels;
pub mod posterior;
pub mod record;

pub use code_map::CodeMap;
pub use error::{BisgError, Result};
pub use labels::{CollapsedRace, RaceLabel};
pub use posterior::{PosteriorVector, Reduction, SUM_TOLERANCE};
pub use record::{ClassificationResult, Geography, PersonRecord};
