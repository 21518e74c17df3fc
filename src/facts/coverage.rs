use std::collections::{BTreeMap, HashMap};

use crate::error::Result;
use crate::report::{Cell, TabularReport};
use crate::unicode::{UnicodeCoverageIndex, NO_BLOCK, UNKNOWN_SCRIPT};

use super::chars::{code_point_label, printable, CharCoverage};

fn percentage(covered: usize, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        covered as f64 * 100.0 / f64::from(total)
    }
}

/// Covered code point count per script, sorted by script name
fn covered_per_script(
    coverage: &CharCoverage,
    index: &UnicodeCoverageIndex,
) -> BTreeMap<&'static str, usize> {
    let mut scripts = BTreeMap::new();
    for (code_point, _) in coverage.iter() {
        let script = index.script_of(code_point).unwrap_or(UNKNOWN_SCRIPT);
        *scripts.entry(script).or_insert(0) += 1;
    }
    scripts
}

/// Coverage per Unicode block, in the order blocks first appear
///
/// Code points outside every block are counted under `No_Block`.
pub fn list_char_block_coverage(
    coverage: &CharCoverage,
    index: &UnicodeCoverageIndex,
) -> Result<TabularReport> {
    let mut order: Vec<&'static str> = Vec::new();
    let mut counts: HashMap<&'static str, usize> = HashMap::new();

    for (code_point, _) in coverage.iter() {
        let block = index.block_of(code_point).unwrap_or(NO_BLOCK);
        let count = counts.entry(block).or_insert_with(|| {
            order.push(block);
            0
        });
        *count += 1;
    }

    let rows = order
        .into_iter()
        .map(|block| {
            let covered = counts[block];
            let total = index.block_size(block);
            vec![
                Cell::from(block),
                Cell::from(covered),
                Cell::from(total),
                Cell::Decimal(percentage(covered, total)),
            ]
        })
        .collect();

    TabularReport::build(["Block", "Covered", "Total", "Coverage (%)"], rows)
}

/// Coverage per Unicode script
///
/// A script is fully covered when every code point assigned to it maps to a glyph.
pub fn list_script_coverage(
    coverage: &CharCoverage,
    index: &UnicodeCoverageIndex,
) -> Result<TabularReport> {
    let rows = covered_per_script(coverage, index)
        .into_iter()
        .map(|(script, covered)| {
            let total = index.script_size(script);
            vec![
                Cell::from(script),
                Cell::from(covered),
                Cell::from(total),
                Cell::Decimal(percentage(covered, total)),
            ]
        })
        .collect();

    TabularReport::build(["Script", "Covered", "Total", "Coverage (%)"], rows)
}

/// Code points missing from every partially covered script
///
/// `Unknown` is never listed: it stands for unassigned code points.
pub fn list_chars_needed_to_cover_script(
    coverage: &CharCoverage,
    index: &UnicodeCoverageIndex,
) -> Result<TabularReport> {
    let mut rows = Vec::new();

    for (script, covered) in covered_per_script(coverage, index) {
        if script == UNKNOWN_SCRIPT || covered as u64 >= u64::from(index.script_size(script)) {
            continue;
        }

        rows.extend(
            index
                .code_points_of_script(script)
                .into_iter()
                .filter(|&code_point| !coverage.contains(code_point))
                .map(|code_point| {
                    vec![
                        Cell::from(script),
                        Cell::Text(code_point_label(code_point)),
                        Cell::Text(printable(code_point)),
                    ]
                }),
        );
    }

    TabularReport::build(["Script", "Code Point", "Char"], rows)
}
