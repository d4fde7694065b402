//! # sheetcast
//!
//! A tabular data access layer: heterogeneous sources — a streamed
//! worksheet window or a plain in-memory collection — consumed through one
//! record-reader contract and mapped to and from typed objects.
//!
//! ## Pieces
//!
//! - [`SheetReader`] lazily iterates a rectangular [`SheetWindow`] of a
//!   worksheet behind the [`WorkbookSource`] backend contract, decoding raw
//!   cells into typed [`Value`]s.
//! - [`RowReader`] exposes any ordered row sequence as a [`RecordRead`]
//!   cursor, resolving column identity through a [`HeaderSource`] strategy.
//! - [`RecordModel`] types declare an ordered scalar schema and move
//!   through [`from_record`] / [`to_row`] / [`to_pairs`] in both
//!   directions.
//! - [`SheetWriter`] drives a record stream into a [`WorkbookSink`],
//!   whole-sheet and append-only.
//!
//! ## Example
//!
//! ```rust
//! use sheetcast::prelude::*;
//!
//! let mut workbook = MemoryWorkbook::new();
//! let sheet = workbook.add_sheet("People");
//! workbook.push_row(sheet, RawRow::new(1, vec![
//!     RawCell::new("A1").with_text("Name"),
//!     RawCell::new("B1").with_text("Age"),
//! ]));
//! workbook.push_row(sheet, RawRow::new(2, vec![
//!     RawCell::new("A2").with_text("Ann"),
//!     RawCell::new("B2").with_text("30"),
//! ]));
//!
//! let mut records = SheetReader::new(&workbook)
//!     .rows()
//!     .unwrap()
//!     .into_records()
//!     .header(HeaderSource::FirstRow);
//!
//! assert!(records.advance().unwrap());
//! assert_eq!(records.get_string(0).unwrap(), "Ann");
//! assert_eq!(records.get_i32(1).unwrap(), 30);
//! ```

pub mod prelude;

// Re-export core types
pub use sheetcast_core::{column, serial, Error, Result, SheetWindow, Value, MAX_COLS, MAX_ROWS};

// Re-export record types
pub use sheetcast_records::{
    from_record, from_record_with_json, to_pairs, to_row, FieldMap, FieldSpec, HeaderSource,
    RecordError, RecordModel, RecordRead, RecordResult, RowReader, ScalarKind,
};

// Re-export worksheet types
pub use sheetcast_xlsx::{
    encode_value, resolve_cell, MemorySink, MemoryWorkbook, OutCell, OutTag, RawCell, RawRow,
    RowIter, SheetError, SheetMeta, SheetReader, SheetResult, SheetWriter, StyleRole, TypeTag,
    WorkbookSink, WorkbookSource,
};
