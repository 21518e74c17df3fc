use std::fmt;

use crate::error::{Error, Result};

use super::csv::escape_field;

/// Separator placed between columns in pretty output
const COLUMN_SEPARATOR: &str = "  ";

/// Fractional digits used for decimals in pretty output
const DECIMAL_PLACES: usize = 2;

/// A single value in a report row
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl Cell {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Integer(_) | Cell::Decimal(_))
    }

    /// Fixed-width friendly rendering used by pretty output
    pub fn to_pretty(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Integer(value) => value.to_string(),
            Cell::Decimal(value) => format!("{:.*}", DECIMAL_PLACES, value),
        }
    }

    /// Lossless rendering used by CSV output
    pub fn to_csv(&self) -> String {
        match self {
            Cell::Text(text) => escape_field(text),
            Cell::Integer(value) => value.to_string(),
            Cell::Decimal(value) => value.to_string(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pretty())
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Integer(i64::from(value))
    }
}

impl From<u16> for Cell {
    fn from(value: u16) -> Self {
        Cell::Integer(i64::from(value))
    }
}

impl From<i16> for Cell {
    fn from(value: i16) -> Self {
        Cell::Integer(i64::from(value))
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Integer(value as i64)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Decimal(value)
    }
}

/// An immutable table of facts produced by a single query
#[derive(Debug, Clone, PartialEq)]
pub struct TabularReport {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl TabularReport {
    /// Create a report, checking that every row matches the header arity
    pub fn build<H, S>(headers: H, rows: Vec<Vec<Cell>>) -> Result<Self>
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if headers.is_empty() {
            return Err(Error::MalformedReport("report has no columns".to_string()));
        }

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(Error::MalformedReport(format!(
                "row {} has {} cells, expected {}",
                index,
                row.len(),
                headers.len()
            )));
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows, excluding the header
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// A column is right-aligned when every data cell in it is numeric
    fn is_numeric_column(&self, column: usize) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|row| row[column].is_numeric())
    }

    /// Render the report as an aligned text grid
    pub fn to_pretty_text(&self) -> String {
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(Cell::to_pretty).collect())
            .collect();

        let widths: Vec<usize> = (0..self.headers.len())
            .map(|column| {
                rendered
                    .iter()
                    .map(|row| row[column].chars().count())
                    .chain(std::iter::once(self.headers[column].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let numeric: Vec<bool> = (0..self.headers.len())
            .map(|column| self.is_numeric_column(column))
            .collect();

        let format_line = |cells: &[String]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(column, cell)| {
                    if numeric[column] {
                        format!("{:>width$}", cell, width = widths[column])
                    } else {
                        format!("{:<width$}", cell, width = widths[column])
                    }
                })
                .collect();
            let mut line = padded.join(COLUMN_SEPARATOR).trim_end().to_string();
            line.push('\n');
            line
        };

        let mut output = format_line(&self.headers);
        for row in &rendered {
            output.push_str(&format_line(row));
        }
        output
    }

    /// Render the report as CSV lines, header first
    pub fn to_csv_rows(&self) -> Vec<String> {
        let header = self
            .headers
            .iter()
            .map(|header| escape_field(header))
            .collect::<Vec<_>>()
            .join(",");

        std::iter::once(header)
            .chain(self.rows.iter().map(|row| {
                row.iter()
                    .map(Cell::to_csv)
                    .collect::<Vec<_>>()
                    .join(",")
            }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TabularReport {
        TabularReport::build(
            ["Name", "Count", "Share"],
            vec![
                vec!["alpha".into(), Cell::Integer(5), Cell::Decimal(12.5)],
                vec!["b".into(), Cell::Integer(120), Cell::Decimal(3.0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn build_rejects_empty_headers() {
        let result = TabularReport::build(Vec::<String>::new(), vec![]);
        assert!(matches!(result, Err(Error::MalformedReport(_))));
    }

    #[test]
    fn build_rejects_short_row() {
        let result = TabularReport::build(["a", "b"], vec![vec![Cell::Integer(1)]]);
        assert!(matches!(result, Err(Error::MalformedReport(_))));
    }

    #[test]
    fn row_count_excludes_header() {
        assert_eq!(sample().row_count(), 2);
    }

    #[test]
    fn pretty_text_aligns_columns() {
        let text = sample().to_pretty_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name   Count  Share");
        assert_eq!(lines[1], "alpha      5  12.50");
        assert_eq!(lines[2], "b        120   3.00");
    }

    #[test]
    fn pretty_text_keeps_text_columns_left_aligned() {
        let report = TabularReport::build(
            ["Tag", "Length"],
            vec![vec!["cmap".into(), Cell::Integer(7)], vec!["OS/2".into(), Cell::Integer(96)]],
        )
        .unwrap();
        let text = report.to_pretty_text();
        assert!(text.contains(&format!("cmap{}7\n", " ".repeat(7))));
        assert!(text.contains(&format!("OS/2{}96\n", " ".repeat(6))));
    }

    #[test]
    fn pretty_text_with_no_rows_is_header_only() {
        let report = TabularReport::build(["Glyph ID"], vec![]).unwrap();
        assert_eq!(report.to_pretty_text(), "Glyph ID\n");
    }

    #[test]
    fn csv_rows_start_with_header() {
        let rows = sample().to_csv_rows();
        assert_eq!(rows, vec!["Name,Count,Share", "alpha,5,12.5", "b,120,3"]);
    }

    #[test]
    fn csv_quotes_cells_with_delimiters_and_quotes() {
        let report =
            TabularReport::build(["Value"], vec![vec![Cell::Text("\"a,b\"".to_string())]]).unwrap();
        assert_eq!(report.to_csv_rows()[1], "\"\"\"a,b\"\"\"");
    }
}
