//! High-level access layer over one spreadsheet document.
//!
//! [`SheetConnector`] owns a [`SheetService`] client, opens a document once at
//! construction, and exposes the read/write/insert/filter operations of this
//! crate. Every operation fetches fresh data from the service; nothing is
//! cached between calls.
//!
//! # Concurrency
//!
//! All operations are synchronous and blocking, one or more service round
//! trips per call. Row numbering for appends and positional inserts is
//! computed optimistically from a prior read, so `at_row` and last-row values
//! can be stale if another writer touches the tab between the read and the
//! write. This layer adds no locking, retry or timeout; those belong to the
//! service client behind the traits.

use crate::client::{
    CellValue, DocumentHandle, RangeUpdate, RawGrid, SheetService, TabHandle, UpdateSummary,
    WriteOptions, rows_from_json,
};
use crate::coords::{column_letter_to_index, range_expression};
use crate::shape::{OutputFormat, ShapedData, shape_grid};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of a range read: the absolute sheet row plus its values in column
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRecord {
    /// Absolute sheet row (1-indexed), not relative to the queried range.
    pub row_number: u32,
    /// Cell values in the exact order the service returned them.
    pub values: Vec<String>,
}

/// Access layer over one spreadsheet document.
///
/// Construction opens the document and records which tab subsequent calls
/// address by default; per-call `tab_name` arguments override it.
pub struct SheetConnector {
    service: Box<dyn SheetService>,
    document: Box<dyn DocumentHandle>,
    document_name: String,
    tab_name: Option<String>,
    options: WriteOptions,
}

impl SheetConnector {
    /// Open `document_name` through the given service client and address
    /// `tab_name` (or the service's default tab when `None`).
    pub fn new(
        service: Box<dyn SheetService>,
        document_name: &str,
        tab_name: Option<&str>,
    ) -> Result<Self> {
        let document = service.open_document(document_name)?;
        Ok(Self {
            service,
            document,
            document_name: document_name.to_string(),
            tab_name: tab_name.map(str::to_string),
            options: WriteOptions::default(),
        })
    }

    /// Name of the opened document.
    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    /// Default tab addressed by calls that pass no `tab_name`.
    pub fn tab_name(&self) -> Option<&str> {
        self.tab_name.as_deref()
    }

    /// Write options passed to every write call.
    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    /// Resolve a tab handle: explicit name, else the connector default.
    fn tab(&self, tab_name: Option<&str>) -> Result<Box<dyn TabHandle>> {
        self.document
            .select_tab(tab_name.or(self.tab_name.as_deref()))
    }

    /// Read the whole tab and shape it into the requested output format.
    ///
    /// The first `skip_rows` rows are dropped before header detection; see
    /// [`shape_grid`] for the exact shaping rules. An empty tab yields an
    /// empty result for every format.
    pub fn read_sheet_data(
        &self,
        tab_name: Option<&str>,
        skip_rows: usize,
        format: OutputFormat,
    ) -> Result<ShapedData> {
        let grid = self.tab(tab_name)?.all_values()?;
        Ok(shape_grid(&grid, skip_rows, format))
    }

    /// Filter: every data row whose cell at `column_index` (0-based within
    /// the row) equals `value`, paired with its absolute sheet row. The
    /// header row is excluded. Rows shorter than `column_index` never match.
    pub fn rows_where_column_equals(
        &self,
        tab_name: Option<&str>,
        column_index: usize,
        value: &str,
    ) -> Result<Vec<(u32, Vec<String>)>> {
        let grid = self.tab(tab_name)?.all_values()?;
        let matches = grid
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, row)| row.get(column_index).map(String::as_str) == Some(value))
            .map(|(idx, row)| (idx as u32 + 1, row.clone()))
            .collect();
        Ok(matches)
    }

    /// Number of rows currently in the tab, 0 for an empty sheet. This is
    /// the append anchor and can be stale under concurrent writers.
    pub fn last_row(&self, tab_name: Option<&str>) -> Result<u32> {
        Ok(self.tab(tab_name)?.all_values()?.len() as u32)
    }

    /// Fetch a rectangular sub-grid and pair each row with its absolute sheet
    /// row number. Row bounds are inclusive; columns are letter references.
    ///
    /// A response without values (or with an empty grid) yields an empty
    /// vector — missing data is normal, not an error.
    pub fn read_range(
        &self,
        tab: &dyn TabHandle,
        tab_name: &str,
        start_row: u32,
        end_row: u32,
        start_column: &str,
        end_column: &str,
    ) -> Result<Vec<RangeRecord>> {
        let expr = range_expression(tab_name, start_row, end_row, start_column, end_column)?;
        let Some(grid) = tab.values_in_range(&expr)? else {
            return Ok(Vec::new());
        };
        let records = grid
            .into_iter()
            .enumerate()
            .map(|(offset, values)| RangeRecord {
                row_number: start_row + offset as u32,
                values,
            })
            .collect();
        Ok(records)
    }

    /// Scan one column for the first empty value beyond the header.
    ///
    /// On a match, returns the full row's values (fetched through an
    /// independent row-level read) and the 1-indexed sheet row of the empty
    /// cell. `Ok(None)` when the column has no empty cell — a normal
    /// outcome. The header row (sheet row 1) is never a candidate.
    pub fn find_first_empty_in_column(
        &self,
        tab: &dyn TabHandle,
        column_letters: &str,
    ) -> Result<Option<(Vec<String>, u32)>> {
        let column = column_letter_to_index(column_letters)?;
        let values = tab.column_values(column)?;
        for (idx, value) in values.iter().enumerate().skip(1) {
            if value.is_empty() {
                let row_number = idx as u32 + 1;
                let row = tab.row_values(row_number)?;
                return Ok(Some((row, row_number)));
            }
        }
        Ok(None)
    }

    /// Write a single cell at (row, column), both 1-indexed. No validation;
    /// the value passes through to the service as-is.
    pub fn update_cell(
        &self,
        tab: &dyn TabHandle,
        row: u32,
        column: u32,
        value: &CellValue,
    ) -> Result<()> {
        tab.update_cell(row, column, value)
    }

    /// Write `values[i]` to `(row, start_column + i)`, one cell per service
    /// call, in order.
    ///
    /// Sequential by design, not batched: if a write in the middle fails, the
    /// cells before it stay written and the error propagates — there is no
    /// rollback.
    pub fn update_row(
        &self,
        tab: &dyn TabHandle,
        row: u32,
        values: &[CellValue],
        start_column: u32,
    ) -> Result<()> {
        for (offset, value) in values.iter().enumerate() {
            tab.update_cell(row, start_column + offset as u32, value)?;
        }
        Ok(())
    }

    /// Append validated rows after the tab's current data region, returning
    /// the service-reported rows-written count.
    ///
    /// Service failures are wrapped in [`Error::Insert`] naming the target
    /// tab, with the cause preserved.
    pub fn append(&self, tab_name: Option<&str>, data: &[Vec<CellValue>]) -> Result<u32> {
        validate_block(data)?;
        // Label for diagnostics when the write targets the service's default
        // tab rather than a named one.
        let target = tab_name
            .or(self.tab_name.as_deref())
            .unwrap_or("(default tab)")
            .to_string();
        let run = || -> Result<UpdateSummary> {
            self.tab(tab_name)?.append_rows(data, &self.options)
        };
        let summary = run().map_err(|e| Error::insert_into(&target, e))?;
        Ok(summary.updated_rows)
    }

    /// Insert a rectangular block of rows into `tab_name` of `document_name`.
    ///
    /// With `at_row` the block's first row lands at that absolute row through
    /// the service's positional-insert primitive; without it the block is
    /// anchored just past the current last row (last row = count of existing
    /// rows, 0 for an empty sheet, read optimistically just before the
    /// write).
    ///
    /// Validation runs before any service interaction: rows must all share
    /// the same length ([`Error::Shape`]). Any service failure during the
    /// write is re-raised as [`Error::Insert`] naming the target tab — never
    /// swallowed. Returns the service-reported rows-written count.
    pub fn insert(
        &self,
        document_name: &str,
        tab_name: &str,
        data: &[Vec<CellValue>],
        at_row: Option<u32>,
    ) -> Result<u32> {
        validate_block(data)?;
        let run = || -> Result<UpdateSummary> {
            let document = self.service.open_document(document_name)?;
            let tab = document.select_tab(Some(tab_name))?;
            match at_row {
                Some(row) => tab.insert_rows_at(row, data, &self.options),
                None => {
                    // Anchor just past the current data region. Optimistic;
                    // see the module-level concurrency note.
                    let last_row = tab.all_values()?.len() as u32;
                    tab.insert_rows_at(last_row + 1, data, &self.options)
                },
            }
        };
        let summary = run().map_err(|e| Error::insert_into(tab_name, e))?;
        Ok(summary.updated_rows)
    }

    /// [`insert`](Self::insert) over a JSON payload. The payload must decode
    /// to a list of lists of primitive cell values; anything else fails with
    /// [`Error::Shape`] before any service call.
    pub fn insert_json(
        &self,
        document_name: &str,
        tab_name: &str,
        payload: &Value,
        at_row: Option<u32>,
    ) -> Result<u32> {
        let data = rows_from_json(payload)?;
        self.insert(document_name, tab_name, &data, at_row)
    }

    /// Pass a batched range/values request through to the service.
    pub fn batch_update(&self, tab_name: Option<&str>, updates: &[RangeUpdate]) -> Result<()> {
        self.tab(tab_name)?.batch_update(updates)
    }
}

/// Reject blocks whose rows differ in length. Runs before any service call,
/// so a failure never leaves partial state.
fn validate_block(data: &[Vec<CellValue>]) -> Result<()> {
    let Some(first) = data.first() else {
        return Ok(());
    };
    if data.iter().any(|row| row.len() != first.len()) {
        return Err(Error::Shape("rows must have equal length".to_string()));
    }
    Ok(())
}
