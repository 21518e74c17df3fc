use std::collections::{BTreeMap, BTreeSet};

use ttf_parser::cmap::Subtable;

use crate::error::Result;
use crate::font::encoding::mac_roman_code_point;
use crate::font::{cmap_format, platform_code, CmapEncoding, SfntFont};
use crate::report::{Cell, TabularReport};

/// Code points that map to a real (non-notdef) glyph
///
/// Built once per font from every cmap subtable whose codes translate to
/// Unicode: Unicode subtables, Windows symbol subtables (Private Use Area
/// codes taken as they are) and Macintosh Roman subtables. The first subtable
/// that maps a code point decides its glyph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharCoverage {
    chars: BTreeMap<u32, u16>,
}

impl CharCoverage {
    pub fn from_font(font: &SfntFont) -> Result<Self> {
        let mut chars = BTreeMap::new();
        for subtable in font.cmap_subtables()? {
            let encoding = CmapEncoding::of(&subtable);
            if encoding == CmapEncoding::Other {
                continue;
            }

            for_each_mapping(&subtable, |code, glyph| {
                let code_point = match encoding {
                    CmapEncoding::MacRoman => mac_roman_code_point(code),
                    _ => Some(code),
                };
                if let Some(code_point) = code_point {
                    chars.entry(code_point).or_insert(glyph);
                }
            });
        }

        log::debug!("Found {} mapped code points", chars.len());
        Ok(Self { chars })
    }

    /// Build a coverage set from explicit `(code point, glyph)` pairs
    pub fn from_mappings(mappings: impl IntoIterator<Item = (u32, u16)>) -> Self {
        let mut chars = BTreeMap::new();
        for (code_point, glyph) in mappings {
            if glyph != 0 {
                chars.entry(code_point).or_insert(glyph);
            }
        }
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, code_point: u32) -> bool {
        self.chars.contains_key(&code_point)
    }

    pub fn glyph(&self, code_point: u32) -> Option<u16> {
        self.chars.get(&code_point).copied()
    }

    /// `(code point, glyph)` pairs in ascending code point order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u16)> + '_ {
        self.chars.iter().map(|(&code_point, &glyph)| (code_point, glyph))
    }
}

/// Call `f` with every `(code, glyph)` pair of a subtable, notdef excluded
fn for_each_mapping(subtable: &Subtable, mut f: impl FnMut(u32, u16)) {
    subtable.codepoints(|code| {
        if let Some(glyph) = subtable.glyph_index(code) {
            if glyph.0 != 0 {
                f(code, glyph.0);
            }
        }
    });
}

/// Every glyph reached by a code of any cmap subtable, whatever its encoding
pub fn cmap_targets(font: &SfntFont) -> Result<BTreeSet<u16>> {
    let mut targets = BTreeSet::new();
    for subtable in font.cmap_subtables()? {
        for_each_mapping(&subtable, |_, glyph| {
            targets.insert(glyph);
        });
    }
    Ok(targets)
}

/// Printable form of a code point; empty for controls and non-characters
pub fn printable(code_point: u32) -> String {
    match char::from_u32(code_point) {
        Some(c) if !c.is_control() => c.to_string(),
        _ => String::new(),
    }
}

pub fn code_point_label(code_point: u32) -> String {
    format!("U+{:04X}", code_point)
}

/// One row per cmap subtable with the number of code points it maps
pub fn list_cmaps(font: &SfntFont) -> Result<TabularReport> {
    let rows = font
        .cmap_subtables()?
        .iter()
        .map(|subtable| {
            let mut mapped = 0usize;
            for_each_mapping(subtable, |_, _| mapped += 1);
            vec![
                Cell::from(platform_code(subtable.platform_id)),
                Cell::from(subtable.encoding_id),
                Cell::from(cmap_format(&subtable.format)),
                Cell::from(mapped),
            ]
        })
        .collect();

    TabularReport::build(["Platform ID", "Encoding ID", "Format", "Num Chars"], rows)
}

/// Number of code points with a valid glyph
pub fn num_chars(coverage: &CharCoverage) -> usize {
    coverage.len()
}

/// Every covered code point with its glyph, ascending
pub fn list_chars(coverage: &CharCoverage) -> Result<TabularReport> {
    let rows = coverage
        .iter()
        .map(|(code_point, glyph)| {
            vec![
                Cell::Text(code_point_label(code_point)),
                Cell::Text(printable(code_point)),
                Cell::from(glyph),
            ]
        })
        .collect();

    TabularReport::build(["Code Point", "Char", "Glyph ID"], rows)
}
