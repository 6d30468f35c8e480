//! Cell coordinate conversion utilities (A1 notation).
//!
//! The hosted service addresses cells with 1-indexed rows and columns, and
//! accepts letter-based column references in range expressions. This module
//! converts between the two:
//! - Letter references ("A", "Z", "AA") ↔ 1-indexed column numbers
//! - (row, column letters) → an absolute [`CellCoord`]
//! - Row/column bounds → a range expression such as `"Sheet1!A1:C3"`
//!
//! Column letters map via bijective base-26 with no zero digit:
//! A=1 … Z=26, AA=27, AB=28, …

use crate::{Error, Result};
use std::fmt;

/// Convert a letter-based column reference to its 1-indexed column number.
///
/// Input is case-insensitive. Empty input or any non-letter character fails
/// with [`Error::InvalidReference`].
///
/// # Examples
///
/// ```
/// use gridlink::coords::column_letter_to_index;
///
/// assert_eq!(column_letter_to_index("A").unwrap(), 1);
/// assert_eq!(column_letter_to_index("Z").unwrap(), 26);
/// assert_eq!(column_letter_to_index("AA").unwrap(), 27);
/// assert_eq!(column_letter_to_index("ab").unwrap(), 28);
/// ```
pub fn column_letter_to_index(letters: &str) -> Result<u32> {
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidReference(format!(
            "column reference '{}' is malformed, must contain only letters",
            letters
        )));
    }

    let mut column = 0u32;
    for c in letters.chars() {
        let val = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        column = column * 26 + val;
    }

    Ok(column)
}

/// Convert a 1-indexed column number to its letter-based reference.
///
/// Fails with [`Error::InvalidReference`] for a zero column.
///
/// # Examples
///
/// ```
/// use gridlink::coords::index_to_column_letter;
///
/// assert_eq!(index_to_column_letter(1).unwrap(), "A");
/// assert_eq!(index_to_column_letter(26).unwrap(), "Z");
/// assert_eq!(index_to_column_letter(27).unwrap(), "AA");
/// ```
pub fn index_to_column_letter(index: u32) -> Result<String> {
    if index == 0 {
        return Err(Error::InvalidReference(
            "column number must be >= 1".to_string(),
        ));
    }

    let mut letters = String::new();
    let mut n = index;
    while n > 0 {
        let c = ((n - 1) % 26) as u8;
        letters.insert(0, (b'A' + c) as char);
        n = (n - 1) / 26;
    }

    Ok(letters)
}

/// Absolute cell coordinate, 1-indexed in both axes to match the service's
/// addressing.
///
/// Constructed through [`cell_coordinate`], which rejects zero rows and
/// malformed column references, so every `CellCoord` renders a valid A1
/// reference.
///
/// # Examples
///
/// ```
/// use gridlink::coords::cell_coordinate;
///
/// let coord = cell_coordinate(1, "A")?;
/// assert_eq!(coord.to_a1(), "A1");
///
/// let coord = cell_coordinate(10, "AA")?;
/// assert_eq!(coord.to_string(), "AA10");
/// # Ok::<(), gridlink::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    row: u32,
    column: u32,
}

impl CellCoord {
    /// Both components must already be validated (>= 1); the public
    /// constructor is [`cell_coordinate`].
    #[inline]
    pub(crate) const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Get the row number (1-indexed).
    #[inline]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Get the column number (1-indexed).
    #[inline]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Render as A1 notation.
    pub fn to_a1(&self) -> String {
        // column >= 1 is guaranteed by cell_coordinate().
        let letters = index_to_column_letter(self.column).unwrap_or_default();
        format!("{}{}", letters, self.row)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1())
    }
}

/// Compose a row number and a column reference into an absolute coordinate.
///
/// # Examples
///
/// ```
/// use gridlink::coords::cell_coordinate;
///
/// let coord = cell_coordinate(3, "B").unwrap();
/// assert_eq!(coord.row(), 3);
/// assert_eq!(coord.column(), 2);
///
/// assert!(cell_coordinate(0, "A").is_err());
/// assert!(cell_coordinate(1, "A1").is_err());
/// ```
pub fn cell_coordinate(row: u32, column_letters: &str) -> Result<CellCoord> {
    if row == 0 {
        return Err(Error::InvalidReference(
            "row number must be >= 1".to_string(),
        ));
    }
    let column = column_letter_to_index(column_letters)?;
    Ok(CellCoord::new(row, column))
}

/// Build the range expression the service's range-fetch primitive expects,
/// e.g. `"Sheet1!A1:C3"`. Row bounds are inclusive.
///
/// # Examples
///
/// ```
/// use gridlink::coords::range_expression;
///
/// let expr = range_expression("Sheet1", 1, 3, "A", "C").unwrap();
/// assert_eq!(expr, "Sheet1!A1:C3");
/// ```
pub fn range_expression(
    tab_name: &str,
    start_row: u32,
    end_row: u32,
    start_column: &str,
    end_column: &str,
) -> Result<String> {
    let start = cell_coordinate(start_row, start_column)?;
    let end = cell_coordinate(end_row, end_column)?;
    Ok(format!("{}!{}:{}", tab_name, start.to_a1(), end.to_a1()))
}
