use ttf_parser::name::Name;
use ttf_parser::PlatformId;

use crate::error::{Error, Result};
use crate::font::encoding::decode_mac_roman;
use crate::font::{platform_code, tag_name, SfntFont};
use crate::report::{Cell, TabularReport};

/// Placeholder for name records that cannot be decoded
pub const UNDECODABLE: &str = "<undecodable>";

/// Macintosh Roman script code
const MAC_ROMAN_ENCODING: u16 = 0;

/// The sfnt version of the font: a tag such as `OTTO`, or a 16.16 number
pub fn sfnt_version(font: &SfntFont) -> String {
    let version = font.sfnt_version();
    let bytes = version.to_be_bytes();
    if bytes.iter().all(u8::is_ascii_graphic) {
        String::from_utf8_lossy(&bytes).into_owned()
    } else {
        format!("{}.{}", version >> 16, version & 0xFFFF)
    }
}

/// Table directory entries in file order
pub fn list_tables(font: &SfntFont) -> Result<TabularReport> {
    let rows = font
        .table_records()
        .map(|record| {
            vec![
                Cell::Text(tag_name(record.tag)),
                Cell::from(record.offset),
                Cell::from(record.length),
                Cell::Text(format!("0x{:08X}", record.check_sum)),
            ]
        })
        .collect();

    TabularReport::build(["Tag", "Offset", "Length", "Checksum"], rows)
}

/// Decoded value of a name record
///
/// UTF-16 encodings are left to ttf-parser; Macintosh Roman is decoded here.
fn decode_name(name: &Name) -> Option<String> {
    if name.is_unicode() {
        return name.to_string();
    }
    match (name.platform_id, name.encoding_id) {
        (PlatformId::Macintosh, MAC_ROMAN_ENCODING) => Some(decode_mac_roman(name.name)),
        _ => None,
    }
}

/// Every record of the `name` table with its decoded value
pub fn list_name_entries(font: &SfntFont) -> Result<TabularReport> {
    font.require_table(b"name")?;
    if font.face().tables().name.is_none() {
        return Err(Error::malformed(b"name", "name records are unreadable"));
    }

    let rows = font
        .face()
        .names()
        .into_iter()
        .map(|name| {
            let value = decode_name(&name).unwrap_or_else(|| {
                log::debug!(
                    "Undecodable name record {} (platform {}, encoding {})",
                    name.name_id,
                    platform_code(name.platform_id),
                    name.encoding_id
                );
                UNDECODABLE.to_string()
            });
            vec![
                Cell::from(platform_code(name.platform_id)),
                Cell::from(name.encoding_id),
                Cell::from(name.language_id),
                Cell::from(name.name_id),
                Cell::Text(value),
            ]
        })
        .collect();

    TabularReport::build(
        ["Platform ID", "Encoding ID", "Language ID", "Name ID", "Value"],
        rows,
    )
}
