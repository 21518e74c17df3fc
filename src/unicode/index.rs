use std::collections::{BTreeSet, HashMap};

use lazy_static::lazy_static;
use regex::Regex;

/// Highest Unicode scalar value plus one
const CODE_SPACE: u32 = 0x11_0000;

/// Block value of code points outside every defined block
pub const NO_BLOCK: &str = "No_Block";

/// Script value of unassigned and private-use code points
pub const UNKNOWN_SCRIPT: &str = "Unknown";

lazy_static! {
    static ref RANGE_LINE: Regex =
        Regex::new(r"^([0-9A-Fa-f]{4,6})(?:\.\.([0-9A-Fa-f]{4,6}))?\s*;\s*([^#]+?)\s*(?:#.*)?$").unwrap();
    static ref GLOBAL_INDEX: UnicodeCoverageIndex = UnicodeCoverageIndex::from_ucd(
        include_str!("../../data/Blocks.txt"),
        include_str!("../../data/Scripts.txt"),
    );
}

#[derive(Debug, Clone, Copy)]
struct CodePointRange<'a> {
    start: u32,
    end: u32,
    name: &'a str,
}

impl CodePointRange<'_> {
    fn len(&self) -> u32 {
        self.end - self.start + 1
    }
}

/// Sorted, non-overlapping ranges with a per-name size table
#[derive(Debug, Default)]
struct RangeTable<'a> {
    ranges: Vec<CodePointRange<'a>>,
    sizes: HashMap<&'a str, u32>,
}

impl<'a> RangeTable<'a> {
    fn parse(text: &'a str) -> Self {
        let mut ranges: Vec<CodePointRange<'a>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(parse_range_line)
            .collect();
        ranges.sort_by_key(|range| range.start);

        // Overlapping entries are dropped so lookups stay unambiguous
        let mut table = RangeTable::default();
        for range in ranges {
            if let Some(last) = table.ranges.last() {
                if range.start <= last.end {
                    log::debug!("Ignoring overlapping range {:04X}..{:04X}", range.start, range.end);
                    continue;
                }
            }
            *table.sizes.entry(range.name).or_insert(0) += range.len();
            table.ranges.push(range);
        }
        table
    }

    fn lookup(&self, code_point: u32) -> Option<&'a str> {
        let index = self
            .ranges
            .partition_point(|range| range.end < code_point);
        self.ranges
            .get(index)
            .filter(|range| range.start <= code_point)
            .map(|range| range.name)
    }

    fn assigned(&self) -> u32 {
        self.ranges.iter().map(CodePointRange::len).sum()
    }
}

fn parse_range_line(line: &str) -> Option<CodePointRange<'_>> {
    let captures = RANGE_LINE.captures(line)?;
    let start = u32::from_str_radix(captures.get(1)?.as_str(), 16).ok()?;
    let end = match captures.get(2) {
        Some(end) => u32::from_str_radix(end.as_str(), 16).ok()?,
        None => start,
    };
    if end < start || end >= CODE_SPACE {
        return None;
    }
    Some(CodePointRange {
        start,
        end,
        name: captures.get(3)?.as_str(),
    })
}

/// Read-only lookup of Unicode block and script membership
#[derive(Debug)]
pub struct UnicodeCoverageIndex {
    blocks: RangeTable<'static>,
    scripts: RangeTable<'static>,
}

impl UnicodeCoverageIndex {
    /// The index built from the embedded Unicode 14.0 data files
    pub fn global() -> &'static UnicodeCoverageIndex {
        &GLOBAL_INDEX
    }

    /// Build an index from `Blocks.txt` and `Scripts.txt` formatted text
    pub fn from_ucd(blocks: &'static str, scripts: &'static str) -> Self {
        Self {
            blocks: RangeTable::parse(blocks),
            scripts: RangeTable::parse(scripts),
        }
    }

    pub fn block_of(&self, code_point: u32) -> Option<&'static str> {
        self.blocks.lookup(code_point)
    }

    pub fn script_of(&self, code_point: u32) -> Option<&'static str> {
        self.scripts.lookup(code_point)
    }

    /// Number of code points in a block, or `No_Block`
    pub fn block_size(&self, name: &str) -> u32 {
        if name == NO_BLOCK {
            return self.no_block_size();
        }
        self.blocks.sizes.get(name).copied().unwrap_or(0)
    }

    /// Number of code points assigned to a script, or `Unknown`
    pub fn script_size(&self, name: &str) -> u32 {
        if name == UNKNOWN_SCRIPT {
            return self.unknown_script_size();
        }
        self.scripts.sizes.get(name).copied().unwrap_or(0)
    }

    pub fn no_block_size(&self) -> u32 {
        CODE_SPACE - self.blocks.assigned()
    }

    pub fn unknown_script_size(&self) -> u32 {
        CODE_SPACE - self.scripts.assigned()
    }

    /// All code points the standard assigns to `name`
    pub fn code_points_of_script(&self, name: &str) -> BTreeSet<u32> {
        self.scripts
            .ranges
            .iter()
            .filter(|range| range.name == name)
            .flat_map(|range| range.start..=range.end)
            .collect()
    }
}
