//! # sheetcast-core
//!
//! Core data structures for the sheetcast tabular access layer.
//!
//! This crate provides the fundamental types used throughout sheetcast:
//! - [`Value`] - The typed cell value union (null, number, text, date-time, boolean-as-int)
//! - [`column`] - Spreadsheet column letter <-> index conversion
//! - [`SheetWindow`] - The row/column rectangle an iterator is restricted to
//! - [`serial`] - Serial day-count date conversion (1900 and 1904 systems)
//!
//! ## Example
//!
//! ```rust
//! use sheetcast_core::{column, SheetWindow, Value};
//!
//! let idx = column::letter_to_index("AB").unwrap();
//! assert_eq!(idx, 28);
//!
//! let mut window = SheetWindow::new();
//! window.set_min_col(2).unwrap();
//! window.set_max_col(4).unwrap();
//! assert_eq!(window.width(), Some(3));
//!
//! let v = Value::from(42i32);
//! assert_eq!(v.to_i64().unwrap(), 42);
//! ```

pub mod column;
pub mod error;
pub mod serial;
pub mod value;
pub mod window;

// Re-exports for convenience
pub use error::{Error, Result};
pub use value::Value;
pub use window::SheetWindow;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;
