use ttf_parser::GlyphId;

use crate::error::{Error, Result};
use crate::font::reader::read_at;
use crate::font::SfntFont;
use crate::report::{Cell, TabularReport};

/// Offset of `lowestRecPPEM` inside `head`
const HEAD_LOWEST_PPEM_OFFSET: usize = 46;
/// Offset of `xAvgCharWidth` inside `OS/2`
const OS2_AVG_CHAR_WIDTH_OFFSET: usize = 2;

/// Font-wide metrics, one per row; metrics the font does not define are left out
pub fn list_font_metrics(font: &SfntFont) -> Result<TabularReport> {
    let face = font.face();
    let bbox = face.global_bounding_box();

    let mut metrics: Vec<(&str, Option<Cell>)> = vec![
        ("Units per em", Some(Cell::from(face.units_per_em()))),
        ("xMin", Some(Cell::from(bbox.x_min))),
        ("yMin", Some(Cell::from(bbox.y_min))),
        ("xMax", Some(Cell::from(bbox.x_max))),
        ("yMax", Some(Cell::from(bbox.y_max))),
        ("Ascender", Some(Cell::from(face.ascender()))),
        ("Descender", Some(Cell::from(face.descender()))),
        ("Line gap", Some(Cell::from(face.line_gap()))),
        ("Typographic ascender", face.typographic_ascender().map(Cell::from)),
        ("Typographic descender", face.typographic_descender().map(Cell::from)),
        ("Typographic line gap", face.typographic_line_gap().map(Cell::from)),
        ("Cap height", face.capital_height().map(Cell::from)),
        ("x-height", face.x_height().map(Cell::from)),
    ];

    let underline = face.underline_metrics();
    let strikeout = face.strikeout_metrics();
    metrics.extend([
        ("Underline position", underline.map(|m| Cell::from(m.position))),
        ("Underline thickness", underline.map(|m| Cell::from(m.thickness))),
        ("Strikeout position", strikeout.map(|m| Cell::from(m.position))),
        ("Strikeout thickness", strikeout.map(|m| Cell::from(m.thickness))),
    ]);

    let head = font.require_table(b"head")?;
    metrics.push((
        "Lowest recommended ppem",
        read_at::<u16>(head, HEAD_LOWEST_PPEM_OFFSET).map(Cell::from),
    ));
    metrics.push((
        "Italic angle",
        face.italic_angle().map(|angle| Cell::Decimal(f64::from(angle))),
    ));

    if let Some(os2) = face.tables().os2 {
        let raw = font.require_table(b"OS/2")?;
        metrics.extend([
            (
                "Average char width",
                read_at::<i16>(raw, OS2_AVG_CHAR_WIDTH_OFFSET).map(Cell::from),
            ),
            ("Weight class", Some(Cell::from(os2.weight().to_number()))),
            ("Width class", Some(Cell::from(os2.width().to_number()))),
        ]);
    }

    let rows = metrics
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| vec![Cell::from(name), value]))
        .collect();

    TabularReport::build(["Metric", "Value"], rows)
}

/// Running min/max/mean of one glyph dimension
#[derive(Debug, Default)]
struct DimensionStats {
    min: Option<i64>,
    max: Option<i64>,
    sum: i64,
    count: usize,
}

impl DimensionStats {
    fn add(&mut self, value: i64) {
        self.min = Some(self.min.map_or(value, |min| min.min(value)));
        self.max = Some(self.max.map_or(value, |max| max.max(value)));
        self.sum += value;
        self.count += 1;
    }

    fn row(&self, name: &str) -> Vec<Cell> {
        let average = if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        };
        vec![
            Cell::from(name),
            Cell::Integer(self.min.unwrap_or(0)),
            Cell::Integer(self.max.unwrap_or(0)),
            Cell::Decimal(average),
        ]
    }
}

/// Aggregate bounding box and side bearing statistics over every glyph
///
/// Glyphs without an outline count as zero-sized boxes.
pub fn list_glyph_dimension_bounds(font: &SfntFont) -> Result<TabularReport> {
    let face = font.face();
    if face.tables().hmtx.is_none() {
        font.require_table(b"hmtx")?;
        return Err(Error::malformed(b"hmtx", "horizontal metrics are unreadable"));
    }

    let mut width = DimensionStats::default();
    let mut height = DimensionStats::default();
    let mut left_bearing = DimensionStats::default();
    let mut right_bearing = DimensionStats::default();

    for id in 0..face.number_of_glyphs() {
        let glyph = GlyphId(id);
        let (x_min, y_min, x_max, y_max) = face
            .glyph_bounding_box(glyph)
            .map(|rect| {
                (
                    i64::from(rect.x_min),
                    i64::from(rect.y_min),
                    i64::from(rect.x_max),
                    i64::from(rect.y_max),
                )
            })
            .unwrap_or_default();

        let glyph_width = x_max - x_min;
        let lsb = face
            .glyph_hor_side_bearing(glyph)
            .map(i64::from)
            .unwrap_or(x_min);
        let advance = face.glyph_hor_advance(glyph).map(i64::from).unwrap_or(0);

        width.add(glyph_width);
        height.add(y_max - y_min);
        left_bearing.add(lsb);
        right_bearing.add(advance - lsb - glyph_width);
    }

    TabularReport::build(
        ["Dimension", "Min", "Max", "Average"],
        vec![
            width.row("Width"),
            height.row("Height"),
            left_bearing.row("Left side bearing"),
            right_bearing.row("Right side bearing"),
        ],
    )
}
