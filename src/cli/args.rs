use std::path::PathBuf;

use clap::Parser;

/// Command line arguments for fontinfo
#[derive(Parser, Debug)]
#[command(
    name = "fontinfo",
    version,
    about = "Font inspector - report tables, metrics and Unicode coverage of a font",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Path to the font or font collection file
    #[arg(value_name = "FONT")]
    pub font: PathBuf,

    /// Print general information: sfnt version, table directory and name entries
    #[arg(short, long)]
    pub general: bool,

    /// Print font and glyph metrics
    #[arg(short, long)]
    pub metrics: bool,

    /// List the cmap subtables
    #[arg(long)]
    pub cmap: bool,

    /// List the characters that map to a glyph
    #[arg(short, long)]
    pub chars: bool,

    /// Print Unicode block coverage
    #[arg(short, long)]
    pub blocks: bool,

    /// Print Unicode script coverage
    #[arg(short, long)]
    pub scripts: bool,

    /// Print glyph metrics, hinting size, unmapped glyphs and subglyph usage
    #[arg(long)]
    pub glyphs: bool,

    /// Print every section
    #[arg(short, long)]
    pub all: bool,

    /// Write tables as CSV
    #[arg(long)]
    pub csv: bool,

    /// Include missing script code points and unmapped glyph lists
    #[arg(short, long)]
    pub detailed: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

const AFTER_HELP: &str = "\
When no section is selected the general section is printed.

For font collections every font is reported separately. In CSV mode each
row starts with the file name and the font's index within the collection.";

/// Parse the process arguments
pub fn parse_args() -> Args {
    Args::parse()
}
