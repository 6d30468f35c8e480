//! Gridlink - a synchronous data-access layer over hosted spreadsheet services
//!
//! This library translates between a hosted spreadsheet service's raw cell
//! grid, 1-indexed row/column coordinates with letter-based column references,
//! and higher-level output shapes, and drives row/column/range reads, writes,
//! positional inserts and filters over a single document tab per call.
//!
//! # Features
//!
//! - **Coordinate translation**: letter references ("A", "AB") ↔ 1-indexed
//!   columns, A1-notation range expressions
//! - **Grid shaping**: list-of-rows, header-keyed mappings, or a headered
//!   tabular frame, with configurable leading rows to skip
//! - **Range reads**: absolute row numbers paired with values in column order
//! - **Row writes**: per-cell sequential writes from a configurable column
//! - **Bulk insert**: validated rectangular blocks, appended or spliced at an
//!   arbitrary row, reporting the rows-written count
//! - **Substitutable client**: the service is a set of object-safe traits,
//!   swappable for a fake in tests
//!
//! Transport, authentication, retry and timeouts are the service client's
//! concern; this layer performs no caching and no retries, and "no data" is a
//! normal return value rather than an error.
//!
//! # Example - Coordinate translation
//!
//! ```
//! use gridlink::coords::{column_letter_to_index, index_to_column_letter, range_expression};
//!
//! assert_eq!(column_letter_to_index("AA")?, 27);
//! assert_eq!(index_to_column_letter(26)?, "Z");
//! assert_eq!(range_expression("Sheet1", 1, 3, "A", "C")?, "Sheet1!A1:C3");
//! # Ok::<(), gridlink::Error>(())
//! ```
//!
//! # Example - Shaping a raw grid
//!
//! ```
//! use gridlink::shape::{shape_grid, OutputFormat, ShapedData};
//!
//! let grid: Vec<Vec<String>> = vec![
//!     vec!["Name".into(), "Age".into()],
//!     vec!["Alice".into(), "30".into()],
//! ];
//!
//! // "list" keeps the header row; "dict" keys each data row by the headers.
//! let ShapedData::Dict(records) = shape_grid(&grid, 0, OutputFormat::Dict) else {
//!     unreachable!()
//! };
//! assert_eq!(records[0]["Name"], "Alice");
//!
//! let ShapedData::Table(table) = shape_grid(&grid, 0, OutputFormat::Table) else {
//!     unreachable!()
//! };
//! assert_eq!(table.column("Age").unwrap(), vec!["30"]);
//! ```
//!
//! # Example - Driving a service client
//!
//! ```no_run
//! use gridlink::{CellValue, SheetConnector, SheetService};
//!
//! # fn open_client() -> Box<dyn SheetService> { unimplemented!() }
//! # fn main() -> Result<(), gridlink::Error> {
//! let service: Box<dyn SheetService> = open_client();
//! let conn = SheetConnector::new(service, "Inventory", Some("Stock"))?;
//!
//! // Whole-tab read shaped as header-keyed records.
//! let records = conn.read_sheet_data(None, 0, "dict".parse()?)?;
//!
//! // Append two validated rows, get back the rows-written count.
//! let written = conn.insert(
//!     "Inventory",
//!     "Stock",
//!     &[
//!         vec![CellValue::from("widget"), CellValue::from(12i64)],
//!         vec![CellValue::from("gadget"), CellValue::from(7i64)],
//!     ],
//!     None,
//! )?;
//! assert_eq!(written, 2);
//! # Ok(())
//! # }
//! ```

/// Cell coordinate conversion utilities (A1 notation)
///
/// Letter-based column references, 1-indexed coordinates, and range
/// expressions for the service's range-fetch primitive.
pub mod coords;

/// Grid shaping into caller-facing row shapes
///
/// List-of-rows, header-keyed mappings, and the headered tabular frame.
pub mod shape;

/// Collaborator interface to the spreadsheet service
///
/// Object-safe service/document/tab traits, cell payloads and write options.
pub mod client;

/// High-level access layer over one document
pub mod connector;

mod error;

// Re-export commonly used types for convenience
pub use client::{
    CellValue, DocumentHandle, RangeUpdate, RawGrid, SheetService, TabHandle, UpdateSummary,
    ValueInputOption, WriteOptions, rows_from_json,
};
pub use connector::{RangeRecord, SheetConnector};
pub use coords::{CellCoord, cell_coordinate, column_letter_to_index, index_to_column_letter};
pub use error::{Error, Result};
pub use shape::{OutputFormat, ShapedData, Table, shape_grid};
