//! Tabular report model and its text and CSV renderings

pub mod csv;
pub mod table;

pub use csv::{escape_field, parse_records, parse_row, with_source_columns};
pub use table::{Cell, TabularReport};
