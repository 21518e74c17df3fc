//! Analysis queries that turn a parsed font into tabular reports
//!
//! Every query reads the font without modifying it and fails on its own,
//! naming the table it could not use, so callers can skip a single report.

pub mod chars;
pub mod coverage;
pub mod general;
pub mod glyphs;
pub mod metrics;

pub use chars::{cmap_targets, list_chars, list_cmaps, num_chars, CharCoverage};
pub use coverage::{list_char_block_coverage, list_chars_needed_to_cover_script, list_script_coverage};
pub use general::{list_name_entries, list_tables, sfnt_version};
pub use glyphs::{hinting_size, list_subglyph_frequency, list_unmapped_glyphs, num_glyphs};
pub use metrics::{list_font_metrics, list_glyph_dimension_bounds};
