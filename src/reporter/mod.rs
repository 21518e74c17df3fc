//! Report assembly and printing for font files

pub mod batch;
pub mod sections;

pub use batch::{process_file, report_fonts};
pub use sections::write_font_report;
