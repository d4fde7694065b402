//! Error types for sheetcast-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetcast-core
#[derive(Debug, Error)]
pub enum Error {
    /// Row bound outside the legal 1-based range
    #[error("Row index {0} out of bounds (1..={1})")]
    RowOutOfBounds(u32, u32),

    /// Column bound outside the legal 1-based range
    #[error("Column index {0} out of bounds (1..={1})")]
    ColumnOutOfBounds(u32, u32),

    /// A window bound would cross the opposite bound on the same axis
    #[error("{axis} bounds crossed: min {min} cannot exceed max {max}")]
    BoundsCrossed {
        axis: &'static str,
        min: u32,
        max: u32,
    },

    /// Column letters contain non-letter characters or are empty
    #[error("Invalid column letters: {0:?}")]
    InvalidColumnLetters(String),

    /// A cell reference has no digit part (e.g. not of the form "B12")
    #[error("Invalid cell reference: {0:?}")]
    InvalidCellRef(String),

    /// A value cannot be coerced to the requested scalar type
    #[error("Cannot convert {from} value to {to}")]
    Conversion {
        from: &'static str,
        to: &'static str,
    },
}
