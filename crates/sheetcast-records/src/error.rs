//! Error types for sheetcast-records

use std::convert::Infallible;

use thiserror::Error;

/// Result type for record operations
pub type RecordResult<T> = std::result::Result<T, RecordError>;

/// Errors that can occur while reading records or mapping objects
#[derive(Debug, Error)]
pub enum RecordError {
    /// A header strategy requires an external map that was never supplied
    #[error("Required {0} is not set")]
    MapNotSet(&'static str),

    /// Field name lookup failed
    #[error("Field not found: {0:?}")]
    FieldNotFound(String),

    /// Two fields resolved to the same name
    #[error("Duplicate field name: {0:?}")]
    DuplicateField(String),

    /// Positional access outside the record width
    #[error("Field slot {0} out of range (count: {1})")]
    SlotOutOfRange(usize, usize),

    /// Positional or typed access without a current record
    #[error("No current record; call advance() first")]
    NoCurrentRecord,

    /// The external JSON column map is not parseable JSON
    #[error("Malformed JSON column map: {0}")]
    MalformedJsonMap(#[from] serde_json::Error),

    /// The external JSON column map parsed but is not a flat object of
    /// string column letters
    #[error("JSON column map must be a flat object of string column letters")]
    JsonMapNotFlat,

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetcast_core::Error),

    /// Error from the upstream row source
    #[error("Row source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl From<Infallible> for RecordError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}
