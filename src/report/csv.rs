/// Quote a field when it contains a delimiter, a quote or a line break
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Prefix CSV rows with the source file name and the font's collection index
///
/// The first row is treated as the header.
pub fn with_source_columns(rows: &[String], file_name: &str, font_index: usize) -> Vec<String> {
    let file_name = escape_field(file_name);
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            if i == 0 {
                format!("Font,font index,{}", row)
            } else {
                format!("{},font index {},{}", file_name, font_index, row)
            }
        })
        .collect()
}

/// Split CSV text back into records of field values
///
/// Quoted fields may span lines. Records end at an unquoted `\n` or `\r\n`;
/// a final line break does not start an empty record.
pub fn parse_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut pending = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        pending = true;
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if current.is_empty() => in_quotes = true,
            (',', false) => fields.push(std::mem::take(&mut current)),
            ('\r', false) if chars.peek() == Some(&'\n') => {}
            ('\n', false) => {
                fields.push(std::mem::take(&mut current));
                records.push(std::mem::take(&mut fields));
                pending = false;
            }
            _ => current.push(c),
        }
    }
    if pending {
        fields.push(current);
        records.push(fields);
    }
    records
}

/// Split a single CSV record back into its field values
pub fn parse_row(record: &str) -> Vec<String> {
    parse_records(record)
        .into_iter()
        .next()
        .unwrap_or_else(|| vec![String::new()])
}
