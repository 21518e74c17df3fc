//! Font file loading and read-only access to sfnt tables

pub mod encoding;
pub mod glyf;
pub mod loader;
pub mod reader;
pub mod sfnt;

pub use glyf::{GlyphShape, GlyphTable};
pub use loader::FontFile;
pub use sfnt::{cmap_format, platform_code, tag_name, CmapEncoding, SfntFont};
