use std::fmt;
use std::path::PathBuf;

use crate::cli::Args;

/// How reports are written to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text tables
    Pretty,
    /// Comma separated rows prefixed with the file name and font index
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Which report sections to print
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sections {
    pub general: bool,
    pub metrics: bool,
    pub cmap: bool,
    pub chars: bool,
    pub blocks: bool,
    pub scripts: bool,
    pub glyphs: bool,
}

impl Sections {
    pub fn all() -> Self {
        Self {
            general: true,
            metrics: true,
            cmap: true,
            chars: true,
            blocks: true,
            scripts: true,
            glyphs: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether any selected section needs the character coverage set
    pub fn needs_coverage(&self) -> bool {
        self.chars || self.blocks || self.scripts || self.glyphs
    }
}

/// Configuration for a report run
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Font or collection file to inspect
    pub font_path: PathBuf,
    pub output: OutputFormat,
    /// Print detailed gap and unmapped glyph listings
    pub detailed: bool,
    pub sections: Sections,
}

impl Config {
    /// Create a new configuration; with no sections selected the general section is shown
    pub fn new(font_path: PathBuf, output: OutputFormat, mut sections: Sections) -> Self {
        if sections.is_empty() {
            sections.general = true;
        }
        Self {
            debug_mode: false,
            font_path,
            output,
            detailed: false,
            sections,
        }
    }

    /// Build a configuration from parsed command line arguments
    pub fn from_args(args: &Args) -> Self {
        let sections = if args.all {
            Sections::all()
        } else {
            Sections {
                general: args.general,
                metrics: args.metrics,
                cmap: args.cmap,
                chars: args.chars,
                blocks: args.blocks,
                scripts: args.scripts,
                glyphs: args.glyphs,
            }
        };
        let output = if args.csv {
            OutputFormat::Csv
        } else {
            OutputFormat::Pretty
        };

        Config {
            debug_mode: args.debug,
            detailed: args.detailed,
            ..Config::new(args.font.clone(), output, sections)
        }
    }
}
