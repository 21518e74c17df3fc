use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::Result;
use crate::font::{GlyphTable, SfntFont};
use crate::report::{Cell, TabularReport};

use super::chars::{cmap_targets, CharCoverage};

/// Tables holding font-wide TrueType hinting programs and data
const HINTING_TABLES: [&[u8; 4]; 3] = [b"fpgm", b"prep", b"cvt "];

pub fn num_glyphs(font: &SfntFont) -> usize {
    usize::from(font.face().number_of_glyphs())
}

/// Glyph ids that no code of any cmap subtable maps to
pub fn list_unmapped_glyphs(font: &SfntFont) -> Result<TabularReport> {
    let mapped = cmap_targets(font)?;
    let rows = (0..font.face().number_of_glyphs())
        .filter(|glyph| !mapped.contains(glyph))
        .map(|glyph| vec![Cell::from(glyph)])
        .collect();

    TabularReport::build(["Glyph ID"], rows)
}

/// Bytes of hinting data: global programs plus every glyph's instructions
pub fn hinting_size(font: &SfntFont) -> Result<usize> {
    let mut size = 0;
    for tag in HINTING_TABLES {
        size += font.table(tag)?.map_or(0, <[u8]>::len);
    }

    if font.has_table(b"glyf") {
        let glyphs = GlyphTable::from_font(font)?;
        for glyph in 0..glyphs.len() as u16 {
            size += glyphs.shape(glyph)?.instruction_len();
        }
    }

    Ok(size)
}

/// Composite component lists, decoded at most once per glyph
struct ComponentGraph<'a> {
    glyphs: GlyphTable<'a>,
    components: HashMap<u16, Vec<u16>>,
}

impl<'a> ComponentGraph<'a> {
    fn new(glyphs: GlyphTable<'a>) -> Self {
        Self {
            glyphs,
            components: HashMap::new(),
        }
    }

    /// Components of `glyph` that exist in the font
    fn components(&mut self, glyph: u16) -> Result<&[u16]> {
        if !self.components.contains_key(&glyph) {
            let components = if self.glyphs.contains(glyph) {
                self.existing_components(glyph)?
            } else {
                log::debug!("Glyph {} is past the end of the glyph table", glyph);
                Vec::new()
            };
            self.components.insert(glyph, components);
        }
        Ok(self
            .components
            .get(&glyph)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    fn existing_components(&self, glyph: u16) -> Result<Vec<u16>> {
        let shape = self.glyphs.shape(glyph)?;
        Ok(shape
            .components()
            .iter()
            .copied()
            .filter(|&component| {
                let exists = self.glyphs.contains(component);
                if !exists {
                    log::debug!("Skipping component {} of glyph {}: no such glyph", component, glyph);
                }
                exists
            })
            .collect())
    }

    /// Every glyph reachable from `root` through component references
    ///
    /// Each glyph is visited once, so self references and cycles end the walk.
    fn reachable(&mut self, root: u16) -> Result<Vec<u16>> {
        let mut visited = HashSet::from([root]);
        let mut reached = Vec::new();
        let mut stack = vec![root];

        while let Some(glyph) = stack.pop() {
            for &component in self.components(glyph)? {
                if visited.insert(component) {
                    reached.push(component);
                    stack.push(component);
                } else if component == root || component == glyph {
                    log::debug!("Component cycle through glyph {} under glyph {}", component, root);
                }
            }
        }

        Ok(reached)
    }
}

/// How many characters use each component glyph, directly or transitively
///
/// Sorted by descending frequency, then ascending glyph id.
pub fn list_subglyph_frequency(font: &SfntFont, coverage: &CharCoverage) -> Result<TabularReport> {
    let mut graph = ComponentGraph::new(GlyphTable::from_font(font)?);
    let mut frequency: BTreeMap<u16, usize> = BTreeMap::new();

    for (_, glyph) in coverage.iter() {
        for component in graph.reachable(glyph)? {
            *frequency.entry(component).or_insert(0) += 1;
        }
    }

    let mut counts: Vec<(u16, usize)> = frequency.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let rows = counts
        .into_iter()
        .map(|(glyph, count)| vec![Cell::from(glyph), Cell::from(count)])
        .collect();

    TabularReport::build(["Glyph ID", "Frequency"], rows)
}
