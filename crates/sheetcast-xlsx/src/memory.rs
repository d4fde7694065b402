//! In-memory reference backend
//!
//! Implements both sides of the backend contract without any document
//! parsing. Used by the test suites and as the worked example of what a
//! real package-reading backend must provide.

use crate::error::{SheetError, SheetResult};
use crate::source::{OutCell, RawRow, SheetMeta, WorkbookSink, WorkbookSource};

/// An in-memory workbook source.
#[derive(Debug, Default)]
pub struct MemoryWorkbook {
    sheets: Vec<SheetMeta>,
    rows: Vec<Vec<RawRow>>,
    shared_strings: Vec<String>,
    /// Style table: entry `i` is the number-format id of style index `i`.
    number_formats: Vec<u32>,
    date_1904: bool,
}

impl MemoryWorkbook {
    /// Create an empty workbook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a worksheet, returning its index.
    pub fn add_sheet(&mut self, name: impl Into<String>) -> usize {
        self.sheets.push(SheetMeta { name: name.into() });
        self.rows.push(Vec::new());
        self.sheets.len() - 1
    }

    /// Append a raw row to a worksheet.
    pub fn push_row(&mut self, sheet: usize, row: RawRow) {
        self.rows[sheet].push(row);
    }

    /// Add a shared string, returning its table index.
    pub fn add_shared_string(&mut self, s: impl Into<String>) -> usize {
        self.shared_strings.push(s.into());
        self.shared_strings.len() - 1
    }

    /// Add a style with the given number-format id, returning its style
    /// index.
    pub fn add_style(&mut self, number_format_id: u32) -> u32 {
        self.number_formats.push(number_format_id);
        (self.number_formats.len() - 1) as u32
    }

    /// Switch the workbook to the 1904 date system.
    pub fn set_date_1904(&mut self, date_1904: bool) {
        self.date_1904 = date_1904;
    }
}

impl WorkbookSource for MemoryWorkbook {
    fn sheets(&self) -> &[SheetMeta] {
        &self.sheets
    }

    fn rows<'a>(
        &'a self,
        sheet: usize,
    ) -> SheetResult<Box<dyn Iterator<Item = SheetResult<RawRow>> + 'a>> {
        let rows = self.rows.get(sheet).ok_or(SheetError::NoWorksheets)?;
        Ok(Box::new(rows.iter().cloned().map(Ok)))
    }

    fn shared_string(&self, index: usize) -> Option<&str> {
        self.shared_strings.get(index).map(String::as_str)
    }

    fn number_format_id(&self, style: u32) -> Option<u32> {
        self.number_formats.get(style as usize).copied()
    }

    fn is_date_1904(&self) -> bool {
        self.date_1904
    }
}

/// An in-memory workbook sink.
#[derive(Debug, Default)]
pub struct MemorySink {
    sheets: Vec<(String, Vec<Vec<OutCell>>)>,
    closed: bool,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated rows of a sheet, by index.
    pub fn sheet_rows(&self, sheet: usize) -> Option<&[Vec<OutCell>]> {
        self.sheets.get(sheet).map(|(_, rows)| rows.as_slice())
    }

    /// The name of a sheet, by index.
    pub fn sheet_name(&self, sheet: usize) -> Option<&str> {
        self.sheets.get(sheet).map(|(name, _)| name.as_str())
    }

    /// Number of sheets written so far.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Whether the sink has been closed (flushed).
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl WorkbookSink for MemorySink {
    fn add_sheet(&mut self, name: &str) -> SheetResult<usize> {
        if self.closed {
            return Err(SheetError::SinkClosed);
        }
        self.sheets.push((name.to_string(), Vec::new()));
        Ok(self.sheets.len() - 1)
    }

    fn append_row(&mut self, sheet: usize, cells: &[OutCell]) -> SheetResult<()> {
        if self.closed {
            return Err(SheetError::SinkClosed);
        }
        let entry = self.sheets.get_mut(sheet).ok_or(SheetError::NoWorksheets)?;
        entry.1.push(cells.to_vec());
        Ok(())
    }

    fn close(&mut self) -> SheetResult<()> {
        self.closed = true;
        Ok(())
    }
}
