use std::io::{self, Write};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::font::FontFile;
use crate::models::Config;

use super::sections::write_font_report;

/// Report on every font of a file, returning one output per font index
///
/// Fonts are analysed in parallel; the results keep font index order.
pub fn report_fonts(file: &FontFile, config: &Config) -> Vec<Result<String>> {
    let count = file.font_count();
    let file_name = file.display_name();
    log::debug!("{} contains {} font(s)", file_name, count);

    (0..count)
        .into_par_iter()
        .map(|index| {
            let font = file.font(index)?;
            Ok(write_font_report(&font, config, &file_name, count as usize))
        })
        .collect()
}

/// Load the configured font file and print its reports
///
/// Returns the number of fonts that were reported on.
pub fn process_file(config: &Config) -> Result<usize> {
    if config.font_path.is_dir() {
        return Err(Error::Config(format!(
            "'{}' is a directory, expected a font file",
            config.font_path.display()
        )));
    }
    let file = FontFile::open(&config.font_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut processed = 0;
    for output in report_fonts(&file, config) {
        match output {
            Ok(text) => {
                out.write_all(text.as_bytes())?;
                processed += 1;
            }
            Err(e) => {
                log::warn!("{}", e);
                writeln!(out, "{}\n", e)?;
            }
        }
    }
    out.flush()?;

    Ok(processed)
}
