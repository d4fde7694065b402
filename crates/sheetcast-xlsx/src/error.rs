//! Error types for sheetcast-xlsx

use thiserror::Error;

use sheetcast_records::RecordError;

/// Result type for worksheet operations
pub type SheetResult<T> = std::result::Result<T, SheetError>;

/// Errors that can occur while iterating or writing worksheets
#[derive(Debug, Error)]
pub enum SheetError {
    /// The source exposes no worksheets at all
    #[error("Workbook has no worksheets")]
    NoWorksheets,

    /// A shared-string cell points past the end of the string table
    #[error("Shared string index {0} out of range")]
    MissingSharedString(usize),

    /// A cell's payload does not match its type tag
    #[error("Malformed cell {reference:?}: {message}")]
    MalformedCell { reference: String, message: String },

    /// The sink was already closed
    #[error("Workbook sink is closed")]
    SinkClosed,

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetcast_core::Error),

    /// Record layer error (surfaces when writing a record stream)
    #[error("Record error: {0}")]
    Record(#[from] RecordError),
}

impl From<SheetError> for RecordError {
    fn from(e: SheetError) -> Self {
        RecordError::Source(Box::new(e))
    }
}
