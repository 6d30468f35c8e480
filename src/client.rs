//! Collaborator interface to the hosted spreadsheet service.
//!
//! The service client is modeled as a fixed capability surface of object-safe
//! traits. Any concrete client (an HTTP binding, an in-memory fake for tests)
//! satisfies [`SheetService`] / [`DocumentHandle`] / [`TabHandle`] and can be
//! substituted without touching the access layer.
//!
//! Transport, authentication, retry and timeouts all live behind these traits;
//! nothing in this crate retries or caches.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Raw cell grid as returned by the service: rows of string cells, row 0
/// being sheet row 1. Rows are not guaranteed rectangular.
pub type RawGrid = Vec<Vec<String>>;

/// Write-side cell payload.
///
/// Serializes to the JSON value the service expects (`Empty` maps to null).
/// No validation is performed on write; values pass through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Empty cell (JSON null on the wire)
    Empty,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// String value
    String(String),
}

impl CellValue {
    /// The JSON form sent to the service.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(x) => write!(f, "{}", x),
            CellValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        CellValue::Float(x)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// Decode a caller-supplied JSON payload into an insert block.
///
/// The payload must be an array of arrays of primitive cell values. This is
/// the boundary where the "expected a list of lists" shape failure surfaces;
/// uniform row length is checked later by the inserter, before any service
/// call.
///
/// # Examples
///
/// ```
/// use gridlink::client::rows_from_json;
/// use serde_json::json;
///
/// let rows = rows_from_json(&json!([["A", 1], ["B", 2]])).unwrap();
/// assert_eq!(rows.len(), 2);
///
/// assert!(rows_from_json(&json!(["not", "nested"])).is_err());
/// ```
pub fn rows_from_json(payload: &Value) -> Result<Vec<Vec<CellValue>>> {
    let Value::Array(rows) = payload else {
        return Err(Error::Shape("expected a list of lists".to_string()));
    };
    rows.iter()
        .map(|row| {
            let Value::Array(cells) = row else {
                return Err(Error::Shape("expected a list of lists".to_string()));
            };
            cells
                .iter()
                .map(|cell| {
                    serde_json::from_value(cell.clone()).map_err(|_| {
                        Error::Shape(format!("cell value {} is not a primitive", cell))
                    })
                })
                .collect()
        })
        .collect()
}

/// How the service interprets written values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueInputOption {
    /// Values are stored literally, without parsing.
    Raw,
    /// Values are parsed as if typed by a user (numbers and dates
    /// interpreted). The service default for this layer.
    #[default]
    UserEntered,
}

/// Options passed explicitly to every write call.
///
/// Immutable by design: constructed once at the access-layer boundary, never
/// shared mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteOptions {
    pub value_input_option: ValueInputOption,
}

/// Write-confirmation payload reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    /// Number of rows newly written.
    pub updated_rows: u32,
}

/// One range/values pair of a batch-update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeUpdate {
    /// Range expression, e.g. "A1:B2".
    pub range: String,
    /// Replacement values for the range.
    pub values: Vec<Vec<CellValue>>,
}

/// Entry point to the spreadsheet service.
pub trait SheetService {
    /// Open a document by name.
    fn open_document(&self, name: &str) -> Result<Box<dyn DocumentHandle>>;
}

/// A handle to one spreadsheet document.
pub trait DocumentHandle {
    /// Select a tab by name, or the service's default tab when `None`.
    fn select_tab(&self, tab_name: Option<&str>) -> Result<Box<dyn TabHandle>>;
}

/// A handle to one tab of a document. All operations are blocking; one call
/// here is one round trip to the service.
pub trait TabHandle {
    /// Every cell of the tab as a raw grid. Empty tab yields an empty grid.
    fn all_values(&self) -> Result<RawGrid>;

    /// Every value of one column (1-indexed), header included.
    fn column_values(&self, column: u32) -> Result<Vec<String>>;

    /// Every value of one row (1-indexed).
    fn row_values(&self, row: u32) -> Result<Vec<String>>;

    /// Write a single cell at (row, column), both 1-indexed.
    fn update_cell(&self, row: u32, column: u32, value: &CellValue) -> Result<()>;

    /// Append rows after the tab's current data region.
    fn append_rows(
        &self,
        rows: &[Vec<CellValue>],
        options: &WriteOptions,
    ) -> Result<UpdateSummary>;

    /// Insert rows so the first one lands at the given absolute row.
    fn insert_rows_at(
        &self,
        row: u32,
        rows: &[Vec<CellValue>],
        options: &WriteOptions,
    ) -> Result<UpdateSummary>;

    /// Apply several range/values updates in one request.
    fn batch_update(&self, updates: &[RangeUpdate]) -> Result<()>;

    /// Fetch the values of a range expression. `Ok(None)` when the response
    /// carries no `values` key — missing data is normal, not an error.
    fn values_in_range(&self, range: &str) -> Result<Option<RawGrid>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_options_default_wire_form() {
        let options = WriteOptions::default();
        assert_eq!(
            serde_json::to_value(options).unwrap(),
            json!({"valueInputOption": "USER_ENTERED"})
        );
    }

    #[test]
    fn test_cell_value_json_forms() {
        assert_eq!(CellValue::Empty.to_json(), json!(null));
        assert_eq!(CellValue::from(42i64).to_json(), json!(42));
        assert_eq!(CellValue::from(1.5).to_json(), json!(1.5));
        assert_eq!(CellValue::from(true).to_json(), json!(true));
        assert_eq!(CellValue::from("x").to_json(), json!("x"));
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::from("abc").to_string(), "abc");
        assert_eq!(CellValue::from(7i64).to_string(), "7");
    }

    #[test]
    fn test_rows_from_json() {
        let rows = rows_from_json(&json!([["A", "B"], [1, null]])).unwrap();
        assert_eq!(rows[0], vec![CellValue::from("A"), CellValue::from("B")]);
        assert_eq!(rows[1], vec![CellValue::Int(1), CellValue::Empty]);
    }

    #[test]
    fn test_rows_from_json_rejects_flat_payloads() {
        for payload in [json!(["not", "nested"]), json!("scalar"), json!(42)] {
            let err = rows_from_json(&payload).unwrap_err();
            assert!(matches!(err, Error::Shape(ref msg) if msg == "expected a list of lists"));
        }
    }

    #[test]
    fn test_rows_from_json_rejects_nested_objects() {
        let err = rows_from_json(&json!([[{"not": "primitive"}]])).unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }
}
