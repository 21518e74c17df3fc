//! Builds small but structurally valid TrueType fonts for tests.

#![allow(dead_code)]

/// Outline definition of one glyph
#[derive(Clone, Debug)]
pub enum GlyphSpec {
    Empty,
    Simple {
        points: Vec<(i16, i16)>,
        instructions: Vec<u8>,
    },
    Composite {
        components: Vec<u16>,
        instructions: Vec<u8>,
    },
}

impl GlyphSpec {
    pub fn triangle() -> Self {
        GlyphSpec::Simple {
            points: vec![(0, 0), (500, 0), (250, 700)],
            instructions: Vec::new(),
        }
    }

    pub fn composite(components: &[u16]) -> Self {
        GlyphSpec::Composite {
            components: components.to_vec(),
            instructions: Vec::new(),
        }
    }

    fn x_min(&self) -> i16 {
        match self {
            GlyphSpec::Simple { points, .. } => points.iter().map(|p| p.0).min().unwrap_or(0),
            _ => 0,
        }
    }
}

/// One cmap encoding record
#[derive(Clone, Debug)]
pub struct CmapSpec {
    pub platform_id: u16,
    pub encoding_id: u16,
    /// `(first code, last code, first glyph)` groups, written as format 12
    pub groups: Vec<(u32, u32, u32)>,
    /// Glyph ids from code 0 upwards, written as format 6 when set
    pub trimmed: Option<Vec<u16>>,
}

impl CmapSpec {
    pub fn unicode(groups: &[(u32, u32, u32)]) -> Self {
        CmapSpec {
            platform_id: 3,
            encoding_id: 10,
            groups: groups.to_vec(),
            trimmed: None,
        }
    }

    pub fn mac_roman(glyphs: &[u16]) -> Self {
        CmapSpec {
            platform_id: 1,
            encoding_id: 0,
            groups: Vec::new(),
            trimmed: Some(glyphs.to_vec()),
        }
    }
}

/// A name record with its raw string bytes
#[derive(Clone, Debug)]
pub struct NameSpec {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: u16,
    pub bytes: Vec<u8>,
}

impl NameSpec {
    pub fn windows(name_id: u16, value: &str) -> Self {
        NameSpec {
            platform_id: 3,
            encoding_id: 1,
            language_id: 0x409,
            name_id,
            bytes: value.encode_utf16().flat_map(u16::to_be_bytes).collect(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FontBuilder {
    pub glyphs: Vec<GlyphSpec>,
    pub advance: u16,
    pub cmaps: Vec<CmapSpec>,
    pub names: Vec<NameSpec>,
    pub extra_tables: Vec<([u8; 4], Vec<u8>)>,
    pub with_glyf: bool,
    pub with_post: bool,
    pub version: u32,
}

/// Location of one table in a built font
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableLayout {
    pub tag: String,
    pub offset: u32,
    pub length: u32,
}

impl Default for FontBuilder {
    fn default() -> Self {
        FontBuilder {
            glyphs: vec![GlyphSpec::Empty],
            advance: 600,
            cmaps: Vec::new(),
            names: Vec::new(),
            extra_tables: Vec::new(),
            with_glyf: true,
            with_post: true,
            version: 0x0001_0000,
        }
    }
}

impl FontBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn glyphs(mut self, glyphs: Vec<GlyphSpec>) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn cmap(mut self, cmap: CmapSpec) -> Self {
        self.cmaps.push(cmap);
        self
    }

    pub fn name(mut self, name: NameSpec) -> Self {
        self.names.push(name);
        self
    }

    pub fn table(mut self, tag: &[u8; 4], data: Vec<u8>) -> Self {
        self.extra_tables.push((*tag, data));
        self
    }

    pub fn version(mut self, version: &[u8; 4]) -> Self {
        self.version = u32::from_be_bytes(*version);
        self
    }

    pub fn without_glyf(mut self) -> Self {
        self.with_glyf = false;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.build_at(0).0
    }

    pub fn layout(&self) -> Vec<TableLayout> {
        self.build_at(0).1
    }

    /// Build the font as if it started at `base` within a larger file
    pub fn build_at(&self, base: usize) -> (Vec<u8>, Vec<TableLayout>) {
        let mut tables: Vec<([u8; 4], Vec<u8>)> = vec![
            (*b"head", self.head()),
            (*b"hhea", self.hhea()),
            (*b"maxp", self.maxp()),
            (*b"hmtx", self.hmtx()),
        ];
        if !self.cmaps.is_empty() {
            tables.push((*b"cmap", self.cmap_table()));
        }
        if !self.names.is_empty() {
            tables.push((*b"name", self.name_table()));
        }
        if self.with_glyf {
            let (glyf, loca) = self.glyf_and_loca();
            tables.push((*b"glyf", glyf));
            tables.push((*b"loca", loca));
        }
        if self.with_post {
            tables.push((*b"post", post()));
        }
        tables.extend(self.extra_tables.iter().cloned());
        tables.sort_by(|a, b| a.0.cmp(&b.0));

        let directory_len = 12 + 16 * tables.len();
        let mut out = Vec::new();
        put_u32(&mut out, self.version);
        put_u16(&mut out, tables.len() as u16);
        put_u16(&mut out, 0);
        put_u16(&mut out, 0);
        put_u16(&mut out, 0);

        let mut body = Vec::new();
        let mut layout = Vec::new();
        for (tag, data) in &tables {
            let offset = (base + directory_len + body.len()) as u32;
            out.extend_from_slice(tag);
            put_u32(&mut out, checksum(data));
            put_u32(&mut out, offset);
            put_u32(&mut out, data.len() as u32);
            layout.push(TableLayout {
                tag: String::from_utf8_lossy(tag).into_owned(),
                offset,
                length: data.len() as u32,
            });

            body.extend_from_slice(data);
            while body.len() % 4 != 0 {
                body.push(0);
            }
        }

        out.extend_from_slice(&body);
        (out, layout)
    }

    fn head(&self) -> Vec<u8> {
        let mut out = Vec::new();
        put_u32(&mut out, 0x0001_0000);
        put_u32(&mut out, 0x0001_0000);
        put_u32(&mut out, 0);
        put_u32(&mut out, 0x5F0F_3CF5);
        put_u16(&mut out, 0);
        put_u16(&mut out, 1000);
        out.extend_from_slice(&[0; 16]);
        for value in [0i16, -200, 500, 800] {
            put_u16(&mut out, value as u16);
        }
        put_u16(&mut out, 0); // macStyle
        put_u16(&mut out, 8); // lowestRecPPEM
        put_u16(&mut out, 2); // fontDirectionHint
        put_u16(&mut out, 1); // long loca offsets
        put_u16(&mut out, 0);
        out
    }

    fn hhea(&self) -> Vec<u8> {
        let mut out = Vec::new();
        put_u32(&mut out, 0x0001_0000);
        for value in [800i16, -200, 90] {
            put_u16(&mut out, value as u16);
        }
        put_u16(&mut out, self.advance);
        out.extend_from_slice(&[0; 6]);
        put_u16(&mut out, 1); // caretSlopeRise
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&[0; 8]);
        put_u16(&mut out, 0);
        put_u16(&mut out, self.glyphs.len() as u16);
        out
    }

    fn maxp(&self) -> Vec<u8> {
        let mut out = Vec::new();
        put_u32(&mut out, 0x0000_5000);
        put_u16(&mut out, self.glyphs.len() as u16);
        out
    }

    fn hmtx(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for glyph in &self.glyphs {
            put_u16(&mut out, self.advance);
            put_u16(&mut out, glyph.x_min() as u16);
        }
        out
    }

    fn cmap_table(&self) -> Vec<u8> {
        let mut subtables: Vec<Vec<u8>> = Vec::new();
        for spec in &self.cmaps {
            let mut sub = Vec::new();
            match &spec.trimmed {
                Some(glyphs) => {
                    put_u16(&mut sub, 6);
                    put_u16(&mut sub, (10 + 2 * glyphs.len()) as u16);
                    put_u16(&mut sub, 0);
                    put_u16(&mut sub, 0);
                    put_u16(&mut sub, glyphs.len() as u16);
                    for &glyph in glyphs {
                        put_u16(&mut sub, glyph);
                    }
                }
                None => {
                    put_u16(&mut sub, 12);
                    put_u16(&mut sub, 0);
                    put_u32(&mut sub, (16 + 12 * spec.groups.len()) as u32);
                    put_u32(&mut sub, 0);
                    put_u32(&mut sub, spec.groups.len() as u32);
                    for &(start, end, glyph) in &spec.groups {
                        put_u32(&mut sub, start);
                        put_u32(&mut sub, end);
                        put_u32(&mut sub, glyph);
                    }
                }
            }
            subtables.push(sub);
        }

        let mut out = Vec::new();
        put_u16(&mut out, 0);
        put_u16(&mut out, self.cmaps.len() as u16);
        let mut offset = 4 + 8 * self.cmaps.len();
        for (spec, sub) in self.cmaps.iter().zip(&subtables) {
            put_u16(&mut out, spec.platform_id);
            put_u16(&mut out, spec.encoding_id);
            put_u32(&mut out, offset as u32);
            offset += sub.len();
        }
        for sub in subtables {
            out.extend_from_slice(&sub);
        }
        out
    }

    fn name_table(&self) -> Vec<u8> {
        let mut out = Vec::new();
        let mut storage = Vec::new();
        put_u16(&mut out, 0);
        put_u16(&mut out, self.names.len() as u16);
        put_u16(&mut out, (6 + 12 * self.names.len()) as u16);
        for name in &self.names {
            put_u16(&mut out, name.platform_id);
            put_u16(&mut out, name.encoding_id);
            put_u16(&mut out, name.language_id);
            put_u16(&mut out, name.name_id);
            put_u16(&mut out, name.bytes.len() as u16);
            put_u16(&mut out, storage.len() as u16);
            storage.extend_from_slice(&name.bytes);
        }
        out.extend_from_slice(&storage);
        out
    }

    fn glyf_and_loca(&self) -> (Vec<u8>, Vec<u8>) {
        let mut glyf = Vec::new();
        let mut loca = Vec::new();
        for glyph in &self.glyphs {
            put_u32(&mut loca, glyf.len() as u32);
            glyf.extend_from_slice(&encode_glyph(glyph));
            while glyf.len() % 4 != 0 {
                glyf.push(0);
            }
        }
        put_u32(&mut loca, glyf.len() as u32);
        (glyf, loca)
    }
}

fn encode_glyph(glyph: &GlyphSpec) -> Vec<u8> {
    let mut out = Vec::new();
    match glyph {
        GlyphSpec::Empty => {}
        GlyphSpec::Simple {
            points,
            instructions,
        } => {
            let x_min = points.iter().map(|p| p.0).min().unwrap_or(0);
            let y_min = points.iter().map(|p| p.1).min().unwrap_or(0);
            let x_max = points.iter().map(|p| p.0).max().unwrap_or(0);
            let y_max = points.iter().map(|p| p.1).max().unwrap_or(0);
            put_u16(&mut out, 1);
            for value in [x_min, y_min, x_max, y_max] {
                put_u16(&mut out, value as u16);
            }
            put_u16(&mut out, (points.len() - 1) as u16);
            put_u16(&mut out, instructions.len() as u16);
            out.extend_from_slice(instructions);
            out.extend(std::iter::repeat(0x01).take(points.len()));
            let mut last = 0i16;
            for point in points {
                put_u16(&mut out, (point.0 - last) as u16);
                last = point.0;
            }
            let mut last = 0i16;
            for point in points {
                put_u16(&mut out, (point.1 - last) as u16);
                last = point.1;
            }
        }
        GlyphSpec::Composite {
            components,
            instructions,
        } => {
            put_u16(&mut out, 0xFFFF);
            for value in [0i16, 0, 500, 700] {
                put_u16(&mut out, value as u16);
            }
            for (i, &component) in components.iter().enumerate() {
                let last = i + 1 == components.len();
                let mut flags = 0x0002u16;
                if !last {
                    flags |= 0x0020;
                } else if !instructions.is_empty() {
                    flags |= 0x0100;
                }
                put_u16(&mut out, flags);
                put_u16(&mut out, component);
                out.extend_from_slice(&[0, 0]);
            }
            if !instructions.is_empty() {
                put_u16(&mut out, instructions.len() as u16);
                out.extend_from_slice(instructions);
            }
        }
    }
    out
}

fn post() -> Vec<u8> {
    let mut out = Vec::new();
    put_u32(&mut out, 0x0003_0000);
    put_u32(&mut out, 0xFFF4_8000); // italic angle -11.5
    put_u16(&mut out, (-100i16) as u16);
    put_u16(&mut out, 50);
    out.extend_from_slice(&[0; 20]);
    out
}

/// Pack several fonts into a TrueType Collection
pub fn build_collection(fonts: &[FontBuilder]) -> Vec<u8> {
    let header_len = 12 + 4 * fonts.len();
    let mut out = Vec::new();
    out.extend_from_slice(b"ttcf");
    put_u32(&mut out, 0x0001_0000);
    put_u32(&mut out, fonts.len() as u32);

    let mut body = Vec::new();
    for font in fonts {
        let start = header_len + body.len();
        put_u32(&mut out, start as u32);
        body.extend_from_slice(&font.build_at(start).0);
        while body.len() % 4 != 0 {
            body.push(0);
        }
    }
    out.extend_from_slice(&body);
    out
}

fn checksum(data: &[u8]) -> u32 {
    data.chunks(4).fold(0u32, |sum, chunk| {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}
