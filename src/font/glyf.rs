use ttf_parser::{loca, GlyphId};

use crate::error::{Error, Result};

use super::reader::{read_at, Reader};
use super::sfnt::SfntFont;

// Composite glyph component flags
const ARG_1_AND_2_ARE_WORDS: u16 = 0x0001;
const WE_HAVE_A_SCALE: u16 = 0x0008;
const MORE_COMPONENTS: u16 = 0x0020;
const WE_HAVE_AN_X_AND_Y_SCALE: u16 = 0x0040;
const WE_HAVE_A_TWO_BY_TWO: u16 = 0x0080;
const WE_HAVE_INSTRUCTIONS: u16 = 0x0100;

/// Size of the glyph header: numberOfContours plus the bounding box
const GLYPH_HEADER_LEN: usize = 10;

/// Structure of a single glyph outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphShape {
    /// No outline data at all
    Empty,
    Simple { instruction_len: usize },
    Composite {
        components: Vec<u16>,
        instruction_len: usize,
    },
}

impl GlyphShape {
    pub fn instruction_len(&self) -> usize {
        match self {
            GlyphShape::Empty => 0,
            GlyphShape::Simple { instruction_len } => *instruction_len,
            GlyphShape::Composite { instruction_len, .. } => *instruction_len,
        }
    }

    pub fn components(&self) -> &[u16] {
        match self {
            GlyphShape::Composite { components, .. } => components,
            _ => &[],
        }
    }
}

/// TrueType outlines addressed through `loca`
pub struct GlyphTable<'a> {
    glyf: &'a [u8],
    loca: loca::Table<'a>,
}

impl<'a> GlyphTable<'a> {
    pub fn from_font(font: &SfntFont<'a>) -> Result<Self> {
        let glyf = font.require_table(b"glyf")?;
        let loca = font.require_table(b"loca")?;
        let tables = font.face().tables();

        let loca = loca::Table::parse(
            tables.maxp.number_of_glyphs,
            tables.head.index_to_location_format,
            loca,
        )
        .ok_or_else(|| Error::malformed(b"loca", "offsets are unreadable"))?;

        Ok(Self { glyf, loca })
    }

    /// Number of glyphs addressed by `loca`
    pub fn len(&self) -> usize {
        usize::from(self.loca.len().saturating_sub(1))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, glyph_id: u16) -> bool {
        usize::from(glyph_id) < self.len()
    }

    /// Raw outline bytes of a glyph; empty for glyphs without an outline
    pub fn glyph_data(&self, glyph_id: u16) -> Result<&'a [u8]> {
        if !self.contains(glyph_id) {
            return Err(Error::malformed(
                b"glyf",
                format!("glyph {} is out of range", glyph_id),
            ));
        }

        match self.loca.glyph_range(GlyphId(glyph_id)) {
            Some(range) => self.glyf.get(range).ok_or_else(|| {
                Error::malformed(b"glyf", format!("glyph {} extends past the table", glyph_id))
            }),
            None => Ok(&[]),
        }
    }

    /// Decode just enough of a glyph to find its components and instructions
    pub fn shape(&self, glyph_id: u16) -> Result<GlyphShape> {
        let data = self.glyph_data(glyph_id)?;
        if data.is_empty() {
            return Ok(GlyphShape::Empty);
        }

        let truncated = || Error::malformed(b"glyf", format!("glyph {} is truncated", glyph_id));
        let contours = read_at::<i16>(data, 0).ok_or_else(truncated)?;

        if contours >= 0 {
            let mut reader = Reader::at(data, GLYPH_HEADER_LEN);
            reader.skip(usize::from(contours as u16) * 2).ok_or_else(truncated)?;
            let instruction_len = reader.read::<u16>().ok_or_else(truncated)?;
            return Ok(GlyphShape::Simple {
                instruction_len: usize::from(instruction_len),
            });
        }

        let mut reader = Reader::at(data, GLYPH_HEADER_LEN);
        let mut components = Vec::new();
        let mut has_instructions = false;
        loop {
            let flags = reader.read::<u16>().ok_or_else(truncated)?;
            components.push(reader.read::<u16>().ok_or_else(truncated)?);

            let mut arguments = if flags & ARG_1_AND_2_ARE_WORDS != 0 { 4 } else { 2 };
            if flags & WE_HAVE_A_SCALE != 0 {
                arguments += 2;
            } else if flags & WE_HAVE_AN_X_AND_Y_SCALE != 0 {
                arguments += 4;
            } else if flags & WE_HAVE_A_TWO_BY_TWO != 0 {
                arguments += 8;
            }
            reader.skip(arguments).ok_or_else(truncated)?;

            has_instructions |= flags & WE_HAVE_INSTRUCTIONS != 0;
            if flags & MORE_COMPONENTS == 0 {
                break;
            }
        }

        let instruction_len = if has_instructions {
            usize::from(reader.read::<u16>().ok_or_else(truncated)?)
        } else {
            0
        };

        Ok(GlyphShape::Composite {
            components,
            instruction_len,
        })
    }
}
