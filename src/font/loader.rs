use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::sfnt::SfntFont;

/// The bytes of a font or font collection file
pub struct FontFile {
    path: PathBuf,
    data: Vec<u8>,
}

impl FontFile {
    /// Read a font file from disk
    pub fn open(path: &Path) -> Result<Self> {
        log::debug!("Reading font file: {}", path.display());
        let data = fs::read(path).map_err(|e| Error::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_bytes(path, data))
    }

    pub fn from_bytes(path: &Path, data: Vec<u8>) -> Self {
        Self {
            path: path.to_path_buf(),
            data,
        }
    }

    /// Name used to label CSV rows
    pub fn display_name(&self) -> String {
        self.path.display().to_string()
    }

    /// Number of faces in the file; 1 for a plain font
    pub fn font_count(&self) -> u32 {
        ttf_parser::fonts_in_collection(&self.data).unwrap_or(1)
    }

    /// Parse a single face
    pub fn font(&self, index: u32) -> Result<SfntFont<'_>> {
        SfntFont::parse(&self.data, index).map_err(|e| Error::Load {
            path: self.path.clone(),
            reason: format!("font index {}: {}", index, e),
        })
    }

    /// Parse every face; each entry fails on its own
    pub fn fonts(&self) -> Vec<Result<SfntFont<'_>>> {
        (0..self.font_count()).map(|index| self.font(index)).collect()
    }
}
