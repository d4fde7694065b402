//! # sheetcast-records
//!
//! One record-reader contract over heterogeneous row sources, plus
//! schema-driven mapping to and from typed objects.
//!
//! A [`RowReader`] wraps any ordered sequence of fixed-width rows — a
//! windowed worksheet scan or a plain in-memory collection — and resolves
//! column identity through one of four [`HeaderSource`] strategies into a
//! canonical [`FieldMap`]. Types implementing [`RecordModel`] declare an
//! ordered scalar schema and move through the [`mapper`] functions in both
//! directions.
//!
//! ## Example
//!
//! ```rust
//! use sheetcast_core::Value;
//! use sheetcast_records::{HeaderSource, RecordRead, RowReader};
//!
//! let rows = vec![
//!     vec![Value::from("Name"), Value::from("Age")],
//!     vec![Value::from("Ann"), Value::from("30")],
//! ];
//! let mut reader = RowReader::from_rows(rows).header(HeaderSource::FirstRow);
//!
//! assert!(reader.advance().unwrap());
//! assert_eq!(reader.get_string(0).unwrap(), "Ann");
//! assert_eq!(reader.get_i32(1).unwrap(), 30);
//! assert!(!reader.advance().unwrap());
//! ```

pub mod error;
pub mod field_map;
pub mod header;
pub mod mapper;
pub mod reader;

// Re-exports for convenience
pub use error::{RecordError, RecordResult};
pub use field_map::FieldMap;
pub use header::HeaderSource;
pub use mapper::{from_record, from_record_with_json, to_pairs, to_row};
pub use mapper::{FieldSpec, RecordModel, ScalarKind};
pub use reader::{RecordRead, RowReader, VecRows};
