//! Grid shaping: converting a raw cell grid into caller-facing row shapes.
//!
//! The service hands back a grid of strings with no rectangularity guarantee.
//! [`shape_grid`] turns that grid into one of three output shapes:
//!
//! - [`OutputFormat::List`] — the rows unchanged, header row included
//! - [`OutputFormat::Dict`] — one header-keyed mapping per data row
//! - [`OutputFormat::Table`] — a headered rectangular frame
//!
//! A configurable number of leading rows is skipped before the header row is
//! detected. Ragged rows never raise: missing trailing cells are treated as
//! empty.

use crate::{Error, Result};
use std::collections::HashMap;
use std::str::FromStr;

/// Output shape selector for [`shape_grid`].
///
/// A closed set; the string form ("list", "dict", "table") is accepted
/// through [`FromStr`] and unrecognized values are rejected rather than
/// silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Ordered list of rows, header row retained as row 0.
    #[default]
    List,
    /// One mapping header→value per data row.
    Dict,
    /// Headered tabular frame.
    Table,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list" => Ok(OutputFormat::List),
            "dict" => Ok(OutputFormat::Dict),
            "table" => Ok(OutputFormat::Table),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// A headered tabular frame: the "table" output shape.
///
/// Rows are rectangular by construction — short input rows are padded with
/// empty strings and over-long rows are truncated to the header width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a frame from a header row and data rows, normalizing every data
    /// row to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// An empty frame: zero columns, zero rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the header row.
    #[inline]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get the data rows (header excluded).
    #[inline]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (= header count).
    #[inline]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Whether the frame holds no data rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All values of the named column, in row order. `None` when no header
    /// matches. With duplicate headers the first occurrence wins.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Value at (data row index, column name). `None` when either is out of
    /// range.
    pub fn get(&self, row_idx: usize, name: &str) -> Option<&str> {
        let idx = self.headers.iter().position(|h| h == name)?;
        self.rows.get(row_idx).map(|row| row[idx].as_str())
    }
}

/// Shaped result of a grid read, tagged by the requested [`OutputFormat`].
#[derive(Debug, Clone, PartialEq)]
pub enum ShapedData {
    /// Rows unchanged, header retained.
    List(Vec<Vec<String>>),
    /// Header-keyed mappings, one per data row.
    Dict(Vec<HashMap<String, String>>),
    /// Headered tabular frame.
    Table(Table),
}

impl ShapedData {
    /// Whether the result holds no rows (for `Table`, no data rows).
    pub fn is_empty(&self) -> bool {
        match self {
            ShapedData::List(rows) => rows.is_empty(),
            ShapedData::Dict(records) => records.is_empty(),
            ShapedData::Table(table) => table.is_empty(),
        }
    }
}

/// Shape a raw grid into the requested output format.
///
/// The first `skip_rows` rows are dropped before anything else; when that
/// consumes the whole grid the result is empty for every format (for
/// `Table`, an empty frame with zero columns). For `Dict` and `Table` the
/// first remaining row is the header row; for `List` it is retained as data.
///
/// Ragged rows are tolerated everywhere: `Dict` zips over the shorter of
/// (headers, row), `Table` pads to the header width.
///
/// # Examples
///
/// ```
/// use gridlink::shape::{shape_grid, OutputFormat, ShapedData};
///
/// let grid = vec![
///     vec!["H1".to_string(), "H2".to_string()],
///     vec!["A".to_string(), "B".to_string()],
/// ];
///
/// let ShapedData::Dict(records) = shape_grid(&grid, 0, OutputFormat::Dict) else {
///     unreachable!()
/// };
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0]["H1"], "A");
/// ```
pub fn shape_grid(grid: &[Vec<String>], skip_rows: usize, format: OutputFormat) -> ShapedData {
    let remaining: &[Vec<String>] = if skip_rows >= grid.len() {
        &[]
    } else {
        &grid[skip_rows..]
    };

    match format {
        OutputFormat::List => ShapedData::List(remaining.to_vec()),
        OutputFormat::Dict => {
            let Some((headers, data_rows)) = remaining.split_first() else {
                return ShapedData::Dict(Vec::new());
            };
            let records = data_rows
                .iter()
                .map(|row| {
                    // Zip stops at the shorter side; duplicate headers keep
                    // the last value.
                    headers
                        .iter()
                        .zip(row.iter())
                        .map(|(h, v)| (h.clone(), v.clone()))
                        .collect::<HashMap<String, String>>()
                })
                .collect();
            ShapedData::Dict(records)
        },
        OutputFormat::Table => {
            let Some((headers, data_rows)) = remaining.split_first() else {
                return ShapedData::Table(Table::empty());
            };
            ShapedData::Table(Table::new(headers.clone(), data_rows.to_vec()))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("list".parse::<OutputFormat>().unwrap(), OutputFormat::List);
        assert_eq!("dict".parse::<OutputFormat>().unwrap(), OutputFormat::Dict);
        assert_eq!(
            "table".parse::<OutputFormat>().unwrap(),
            OutputFormat::Table
        );
        assert!(matches!(
            "pandas".parse::<OutputFormat>(),
            Err(Error::UnknownFormat(_))
        ));
        assert!("List".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_empty_grid_every_format() {
        for format in [OutputFormat::List, OutputFormat::Dict, OutputFormat::Table] {
            for skip in [0, 1, 5] {
                assert!(shape_grid(&[], skip, format).is_empty());
            }
        }
    }

    #[test]
    fn test_skip_past_end_every_format() {
        let g = grid(&[&["H"], &["A"]]);
        for format in [OutputFormat::List, OutputFormat::Dict, OutputFormat::Table] {
            let shaped = shape_grid(&g, 2, format);
            assert!(shaped.is_empty());
        }
        // Table with everything skipped: zero columns, not an error.
        let ShapedData::Table(table) = shape_grid(&g, 99, OutputFormat::Table) else {
            panic!("expected table");
        };
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_list_keeps_header() {
        let g = grid(&[&["H1", "H2"], &["A", "B"], &["C", "D"]]);
        let ShapedData::List(rows) = shape_grid(&g, 0, OutputFormat::List) else {
            panic!("expected list");
        };
        assert_eq!(rows, g);
    }

    #[test]
    fn test_list_with_skip_rows() {
        let g = grid(&[&["H1", "H2"], &["A", "B"], &["C", "D"]]);
        let ShapedData::List(rows) = shape_grid(&g, 1, OutputFormat::List) else {
            panic!("expected list");
        };
        assert_eq!(rows, grid(&[&["A", "B"], &["C", "D"]]));
    }

    #[test]
    fn test_dict_shaping() {
        let g = grid(&[&["H1", "H2"], &["A", "B"], &["C", "D"]]);
        let ShapedData::Dict(records) = shape_grid(&g, 0, OutputFormat::Dict) else {
            panic!("expected dict");
        };
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["H1"], "A");
        assert_eq!(records[0]["H2"], "B");
        assert_eq!(records[1]["H1"], "C");
        assert_eq!(records[1]["H2"], "D");
    }

    #[test]
    fn test_dict_header_only_grid() {
        let g = grid(&[&["H1", "H2"]]);
        let ShapedData::Dict(records) = shape_grid(&g, 0, OutputFormat::Dict) else {
            panic!("expected dict");
        };
        assert!(records.is_empty());
    }

    #[test]
    fn test_dict_ragged_rows() {
        // Short row: missing trailing values are simply absent keys.
        let g = grid(&[&["H1", "H2", "H3"], &["A"]]);
        let ShapedData::Dict(records) = shape_grid(&g, 0, OutputFormat::Dict) else {
            panic!("expected dict");
        };
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0]["H1"], "A");
        assert!(!records[0].contains_key("H2"));

        // Over-long row: extra cells have no header and are dropped.
        let g = grid(&[&["H1"], &["A", "extra"]]);
        let ShapedData::Dict(records) = shape_grid(&g, 0, OutputFormat::Dict) else {
            panic!("expected dict");
        };
        assert_eq!(records[0].len(), 1);
    }

    #[test]
    fn test_dict_duplicate_headers_last_wins() {
        let g = grid(&[&["H", "H"], &["first", "second"]]);
        let ShapedData::Dict(records) = shape_grid(&g, 0, OutputFormat::Dict) else {
            panic!("expected dict");
        };
        assert_eq!(records[0]["H"], "second");
    }

    #[test]
    fn test_table_shaping() {
        let g = grid(&[&["Name", "Age"], &["Alice", "30"], &["Bob", "25"]]);
        let ShapedData::Table(table) = shape_grid(&g, 0, OutputFormat::Table) else {
            panic!("expected table");
        };
        assert_eq!(table.headers(), ["Name", "Age"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column("Name").unwrap(), vec!["Alice", "Bob"]);
        assert_eq!(table.get(1, "Age"), Some("25"));
        assert_eq!(table.get(1, "Missing"), None);
        assert_eq!(table.get(9, "Age"), None);
    }

    #[test]
    fn test_table_header_only_grid() {
        let g = grid(&[&["H1", "H2"]]);
        let ShapedData::Table(table) = shape_grid(&g, 0, OutputFormat::Table) else {
            panic!("expected table");
        };
        assert_eq!(table.headers(), ["H1", "H2"]);
        assert_eq!(table.row_count(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_table_pads_and_truncates() {
        let g = grid(&[&["H1", "H2"], &["A"], &["B", "C", "D"]]);
        let ShapedData::Table(table) = shape_grid(&g, 0, OutputFormat::Table) else {
            panic!("expected table");
        };
        assert_eq!(table.rows()[0], vec!["A".to_string(), String::new()]);
        assert_eq!(table.rows()[1], vec!["B".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_skip_rows_moves_header() {
        // After skipping the banner row, the next row becomes the header.
        let g = grid(&[&["Skip this"], &["H1", "H2"], &["V1", "V2"]]);
        let ShapedData::Table(table) = shape_grid(&g, 1, OutputFormat::Table) else {
            panic!("expected table");
        };
        assert_eq!(table.headers(), ["H1", "H2"]);
        assert_eq!(table.row_count(), 1);
    }
}
