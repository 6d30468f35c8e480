//! Unified error types for gridlink operations.
//!
//! Missing data is deliberately not represented here: an empty range response,
//! a column with no empty cell, or a tab with zero rows are all normal
//! outcomes surfaced as empty vectors or `None`. Only malformed input and
//! wrapped service failures raise.
use thiserror::Error;

/// Main error type for gridlink operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed column letters or a non-positive row/column coordinate.
    #[error("Invalid cell reference: {0}")]
    InvalidReference(String),

    /// Unrecognized output-format selector (expected "list", "dict" or "table").
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    /// Malformed bulk-insert payload. Raised before any service call, so it
    /// never leaves partial state behind.
    #[error("Invalid insert payload: {0}")]
    Shape(String),

    /// A service failure during insert/append, annotated with the target tab.
    /// The original cause is preserved for diagnostics.
    #[error("Failed to insert rows into tab '{tab}': {source}")]
    Insert {
        tab: String,
        #[source]
        source: Box<Error>,
    },

    /// Failure reported by the underlying spreadsheet service.
    #[error("Spreadsheet service error: {0}")]
    Service(String),
}

impl Error {
    /// Wrap a service failure at the insert boundary, naming the target tab.
    pub(crate) fn insert_into(tab: &str, source: Error) -> Self {
        Error::Insert {
            tab: tab.to_string(),
            source: Box::new(source),
        }
    }
}

/// Result type for gridlink operations.
pub type Result<T> = std::result::Result<T, Error>;
