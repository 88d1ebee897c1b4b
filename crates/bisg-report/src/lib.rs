pub mod confusion;
pub mod frequency;

pub use confusion::ConfusionTable;
pub use frequency::ClassificationReport;
