use std::fmt::Display;

use crate::error::Result;
use crate::facts::{self, CharCoverage};
use crate::font::SfntFont;
use crate::models::{Config, OutputFormat};
use crate::report::{with_source_columns, TabularReport};
use crate::unicode::UnicodeCoverageIndex;

/// Accumulates the printed output for one font
struct SectionWriter<'c> {
    config: &'c Config,
    file_name: &'c str,
    font_index: usize,
    out: String,
}

impl<'c> SectionWriter<'c> {
    fn line(&mut self, text: impl Display) {
        self.out.push_str(&text.to_string());
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Print a report under its title, or a one-line notice when the query failed
    fn table(&mut self, title: &str, report: Result<TabularReport>) {
        match report {
            Ok(report) => self.render(title, &report),
            Err(e) => self.skipped(title, e),
        }
    }

    fn render(&mut self, title: &str, report: &TabularReport) {
        self.line(format!("{}:", title));
        match self.config.output {
            OutputFormat::Pretty => self.out.push_str(&report.to_pretty_text()),
            OutputFormat::Csv => {
                let rows = with_source_columns(&report.to_csv_rows(), self.file_name, self.font_index);
                for row in rows {
                    self.line(row);
                }
            }
        }
        self.blank();
    }

    fn skipped(&mut self, title: &str, error: impl Display) {
        log::debug!("Skipping '{}' for font index {}: {}", title, self.font_index, error);
        self.line(format!("{}: unavailable ({})", title, error));
        self.blank();
    }

    /// Run a section that depends on the character coverage set
    fn with_coverage<T>(
        &mut self,
        title: &str,
        coverage: &Result<CharCoverage>,
        query: impl FnOnce(&CharCoverage) -> Result<T>,
    ) -> Option<T> {
        match coverage {
            Ok(coverage) => match query(coverage) {
                Ok(value) => Some(value),
                Err(e) => {
                    self.skipped(title, e);
                    None
                }
            },
            Err(e) => {
                self.skipped(title, e);
                None
            }
        }
    }
}

/// Build the complete textual report for one font
///
/// `font_count` is the number of fonts in the source file; collections get a
/// per-font banner in pretty mode.
pub fn write_font_report(
    font: &SfntFont,
    config: &Config,
    file_name: &str,
    font_count: usize,
) -> String {
    let font_index = font.index() as usize;
    let mut writer = SectionWriter {
        config,
        file_name,
        font_index,
        out: String::new(),
    };
    let sections = config.sections;
    let index = UnicodeCoverageIndex::global();

    if font_count > 1 && config.output == OutputFormat::Pretty {
        writer.line(format!("==== Information for font index {} ====", font_index));
        writer.blank();
    }

    let coverage = if sections.needs_coverage() {
        CharCoverage::from_font(font)
    } else {
        Ok(CharCoverage::default())
    };

    if sections.general {
        writer.line(format!("sfnt version: {}", facts::sfnt_version(font)));
        writer.blank();
        writer.table("Font Tables", facts::list_tables(font));
        writer.table("Name Table Entries", facts::list_name_entries(font));
    }

    if sections.metrics {
        writer.table("Font Metrics", facts::list_font_metrics(font));
    }

    if sections.metrics || sections.glyphs {
        writer.table("Glyph Metrics", facts::list_glyph_dimension_bounds(font));
    }

    if sections.cmap {
        writer.table("Cmaps in the font", facts::list_cmaps(font));
    }

    if sections.blocks {
        let title = "Unicode block coverage";
        if let Some(report) = writer.with_coverage(title, &coverage, |c| {
            facts::list_char_block_coverage(c, index)
        }) {
            writer.render(title, &report);
        }
    }

    if sections.scripts {
        let title = "Unicode script coverage";
        if let Some(report) =
            writer.with_coverage(title, &coverage, |c| facts::list_script_coverage(c, index))
        {
            writer.render(title, &report);
        }

        if config.detailed {
            let title = "Uncovered code points in partially-covered scripts";
            if let Some(report) = writer.with_coverage(title, &coverage, |c| {
                facts::list_chars_needed_to_cover_script(c, index)
            }) {
                writer.render(title, &report);
            }
        }
    }

    if sections.chars {
        let title = "Characters with valid glyphs";
        if let Some(report) = writer.with_coverage(title, &coverage, facts::list_chars) {
            writer.render(title, &report);
            if config.output == OutputFormat::Pretty {
                writer.line(format!(
                    "Total number of characters with valid glyphs: {}",
                    report.row_count()
                ));
                writer.blank();
            }
        }
    }

    if sections.glyphs {
        match facts::hinting_size(font) {
            Ok(size) => writer.line(format!("Total hinting size: {}", size)),
            Err(e) => writer.line(format!("Total hinting size: unavailable ({})", e)),
        }

        let title = "Unmapped glyphs";
        match facts::list_unmapped_glyphs(font) {
            Ok(unmapped) => {
                writer.line(format!(
                    "Number of unmapped glyphs: {} / {}",
                    unmapped.row_count(),
                    facts::num_glyphs(font)
                ));
                writer.blank();
                if config.detailed {
                    writer.render(title, &unmapped);
                }
            }
            Err(e) => writer.skipped(title, e),
        }

        let title = "Subglyphs used by characters in the font";
        if let Some(report) = writer.with_coverage(title, &coverage, |c| {
            facts::list_subglyph_frequency(font, c)
        }) {
            writer.render(title, &report);
        }
    }

    writer.out
}
