pub mod code_map;
pub mod roster;
pub mod table;

pub use code_map::load_code_map;
pub use roster::{RosterOptions, load_roster};
pub use table::{CsvTable, read_csv_table};
