use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Custom error type for the fontinfo tool
#[derive(Debug, Error)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Font parsing errors
    #[error("Font error: {0}")]
    Face(#[from] ttf_parser::FaceParsingError),
    /// The font file could not be read or parsed
    #[error("Unable to load font {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },
    /// A query needs a table the font does not carry
    #[error("Missing table '{0}'")]
    MissingTable(String),
    /// A table is present but its contents are inconsistent
    #[error("Malformed table '{tag}': {reason}")]
    MalformedTable { tag: String, reason: String },
    /// A report was assembled with mismatched rows
    #[error("Malformed report: {0}")]
    MalformedReport(String),
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn missing(tag: &[u8; 4]) -> Self {
        Error::MissingTable(tag_name(tag))
    }

    pub fn malformed(tag: &[u8; 4], reason: impl Into<String>) -> Self {
        Error::MalformedTable {
            tag: tag_name(tag),
            reason: reason.into(),
        }
    }
}

fn tag_name(tag: &[u8; 4]) -> String {
    String::from_utf8_lossy(tag).trim_end().to_string()
}

/// Result type alias for fontinfo operations
pub type Result<T> = std::result::Result<T, Error>;
