//! Prelude module - common imports for sheetcast users
//!
//! ```rust
//! use sheetcast::prelude::*;
//! ```

pub use crate::{
    // Mapping
    from_record,
    from_record_with_json,
    to_pairs,
    to_row,

    // Addressing
    column,
    serial,

    // Record types
    FieldMap,
    FieldSpec,
    HeaderSource,
    RecordError,
    RecordModel,
    RecordRead,
    RecordResult,
    RowReader,
    ScalarKind,

    // Error types
    Error,
    Result,
    SheetError,
    SheetResult,

    // Worksheet types
    MemorySink,
    MemoryWorkbook,
    OutCell,
    OutTag,
    RawCell,
    RawRow,
    RowIter,
    SheetMeta,
    SheetReader,
    SheetWindow,
    SheetWriter,
    StyleRole,
    TypeTag,
    Value,
    WorkbookSink,
    WorkbookSource,
};
