//! # sheetcast-xlsx
//!
//! Worksheet access for sheetcast: the backend collaborator contract, cell
//! value resolution, windowed row iteration and append-only sheet writing.
//!
//! Package parsing lives behind the [`WorkbookSource`] / [`WorkbookSink`]
//! traits — this crate never opens a container itself. [`MemoryWorkbook`]
//! and [`MemorySink`] implement the contract in memory for tests and as a
//! reference for real backends.
//!
//! ## Example
//!
//! ```rust
//! use sheetcast_records::RecordRead;
//! use sheetcast_xlsx::{MemoryWorkbook, RawCell, RawRow, SheetReader};
//!
//! let mut workbook = MemoryWorkbook::new();
//! let sheet = workbook.add_sheet("Data");
//! workbook.push_row(sheet, RawRow::new(1, vec![
//!     RawCell::new("A1").with_text("Ann"),
//!     RawCell::new("B1").with_text("30"),
//! ]));
//!
//! let mut records = SheetReader::new(&workbook)
//!     .rows()
//!     .unwrap()
//!     .into_records();
//!
//! assert!(records.advance().unwrap());
//! assert_eq!(records.field_name(0).unwrap(), "A");
//! assert_eq!(records.get_i32(1).unwrap(), 30);
//! ```

pub mod error;
pub mod memory;
pub mod reader;
pub mod resolve;
pub mod source;
pub mod writer;

// Re-exports for convenience
pub use error::{SheetError, SheetResult};
pub use memory::{MemorySink, MemoryWorkbook};
pub use reader::{RowIter, SheetReader};
pub use resolve::{resolve_cell, DATE_FORMAT_IDS};
pub use source::{
    OutCell, OutTag, RawCell, RawRow, SheetMeta, StyleRole, TypeTag, WorkbookSink, WorkbookSource,
};
pub use writer::{encode_value, SheetWriter};
