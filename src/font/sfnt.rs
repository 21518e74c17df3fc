use std::ops::Range;

use ttf_parser::cmap::{Format, Subtable};
use ttf_parser::{Face, FaceParsingError, PlatformId, Tag, TableRecord};

use crate::error::{Error, Result};

use super::reader::read_at;

/// Magic of a TrueType Collection header
const COLLECTION_TAG: [u8; 4] = *b"ttcf";
/// Offset of the first face offset in a collection header
const COLLECTION_OFFSETS_START: usize = 12;

/// Windows encoding used by symbol fonts
const WINDOWS_SYMBOL_ENCODING: u16 = 0;
/// Macintosh Roman script code
const MAC_ROMAN_ENCODING: u16 = 0;

/// How the codes of a cmap subtable relate to Unicode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmapEncoding {
    /// Codes are Unicode scalar values
    Unicode,
    /// Windows symbol fonts: codes are Private Use Area code points
    Symbol,
    /// Single byte Macintosh Roman codes
    MacRoman,
    /// Codes that cannot be mapped to Unicode
    Other,
}

impl CmapEncoding {
    pub fn of(subtable: &Subtable) -> Self {
        if matches!(subtable.format, Format::UnicodeVariationSequences(_)) {
            return CmapEncoding::Other;
        }
        if subtable.is_unicode() {
            return CmapEncoding::Unicode;
        }
        match (subtable.platform_id, subtable.encoding_id) {
            (PlatformId::Windows, WINDOWS_SYMBOL_ENCODING) => CmapEncoding::Symbol,
            (PlatformId::Macintosh, MAC_ROMAN_ENCODING) => CmapEncoding::MacRoman,
            _ => CmapEncoding::Other,
        }
    }
}

/// Numeric format of a cmap subtable
pub fn cmap_format(format: &Format) -> u16 {
    match format {
        Format::ByteEncodingTable(_) => 0,
        Format::HighByteMappingThroughTable(_) => 2,
        Format::SegmentMappingToDeltaValues(_) => 4,
        Format::TrimmedTableMapping(_) => 6,
        Format::MixedCoverage => 8,
        Format::TrimmedArray(_) => 10,
        Format::SegmentedCoverage(_) => 12,
        Format::ManyToOneRangeMappings(_) => 13,
        Format::UnicodeVariationSequences(_) => 14,
    }
}

/// Numeric platform identifier
pub fn platform_code(platform: PlatformId) -> u16 {
    match platform {
        PlatformId::Unicode => 0,
        PlatformId::Macintosh => 1,
        PlatformId::Iso => 2,
        PlatformId::Windows => 3,
        PlatformId::Custom => 4,
    }
}

/// Table tag as text, e.g. `cvt `
pub fn tag_name(tag: Tag) -> String {
    String::from_utf8_lossy(&tag.to_bytes()).into_owned()
}

/// A single parsed font face
pub struct SfntFont<'a> {
    face: Face<'a>,
    index: u32,
    version: u32,
}

impl<'a> SfntFont<'a> {
    /// Parse face `index` of a font or collection file
    pub fn parse(data: &'a [u8], index: u32) -> Result<Self> {
        let face = Face::parse(data, index)?;
        let version = sfnt_version_at(data, index).ok_or(FaceParsingError::MalformedFont)?;

        Ok(Self {
            face,
            index,
            version,
        })
    }

    pub fn face(&self) -> &Face<'a> {
        &self.face
    }

    /// Position of the face within its collection; 0 for plain fonts
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Raw `sfntVersion` of the face's offset table
    pub fn sfnt_version(&self) -> u32 {
        self.version
    }

    /// Table records in file order
    pub fn table_records(&self) -> impl Iterator<Item = TableRecord> + 'a {
        self.face.raw_face().table_records.into_iter()
    }

    fn record(&self, tag: &[u8; 4]) -> Option<TableRecord> {
        let tag = Tag::from_bytes(tag);
        self.table_records().find(|record| record.tag == tag)
    }

    pub fn has_table(&self, tag: &[u8; 4]) -> bool {
        self.record(tag).is_some()
    }

    /// Raw bytes of a table, `None` when absent
    ///
    /// Records are searched in order, so unsorted directories still resolve.
    pub fn table(&self, tag: &[u8; 4]) -> Result<Option<&'a [u8]>> {
        let Some(record) = self.record(tag) else {
            return Ok(None);
        };

        record_range(&record)
            .and_then(|range| self.face.raw_face().data.get(range))
            .map(Some)
            .ok_or_else(|| Error::malformed(tag, "table extends past the end of the file"))
    }

    /// Raw bytes of a table the caller cannot work without
    pub fn require_table(&self, tag: &[u8; 4]) -> Result<&'a [u8]> {
        self.table(tag)?.ok_or_else(|| Error::missing(tag))
    }

    /// Every cmap subtable in encoding record order
    pub fn cmap_subtables(&self) -> Result<Vec<Subtable<'a>>> {
        self.require_table(b"cmap")?;
        let cmap = self
            .face
            .tables()
            .cmap
            .ok_or_else(|| Error::malformed(b"cmap", "encoding records are unreadable"))?;

        (0..cmap.subtables.len())
            .map(|index| {
                cmap.subtables.get(index).ok_or_else(|| {
                    Error::malformed(b"cmap", format!("subtable {} is unreadable", index))
                })
            })
            .collect()
    }
}

fn record_range(record: &TableRecord) -> Option<Range<usize>> {
    let start = usize::try_from(record.offset).ok()?;
    let end = start.checked_add(usize::try_from(record.length).ok()?)?;
    Some(start..end)
}

/// `sfntVersion` of face `index`, following the collection header if present
fn sfnt_version_at(data: &[u8], index: u32) -> Option<u32> {
    let offset = if read_at::<u32>(data, 0)? == u32::from_be_bytes(COLLECTION_TAG) {
        let entry = COLLECTION_OFFSETS_START.checked_add(usize::try_from(index).ok()?.checked_mul(4)?)?;
        usize::try_from(read_at::<u32>(data, entry)?).ok()?
    } else {
        0
    };
    read_at(data, offset)
}
