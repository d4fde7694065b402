//! Windowed worksheet row iteration

use sheetcast_core::{column, SheetWindow, Value};
use sheetcast_records::RowReader;

use crate::error::{SheetError, SheetResult};
use crate::resolve::resolve_cell;
use crate::source::{RawRow, WorkbookSource};

/// Lazily iterates a rectangular window of a worksheet, materializing
/// fixed-width rows of typed values.
///
/// Two-phase lifecycle: configure the target sheet and [`SheetWindow`],
/// then call [`rows`](SheetReader::rows) to bind. Binding resolves the
/// worksheet, scans row spans for an unset upper column bound and applies
/// the row filters; structural problems surface there, never at
/// construction. Calling `rows` again restarts the scan from scratch — the
/// full resolution is repeated and nothing from the previous pass is
/// cached, so a restart over an unchanged source yields the same rows.
#[derive(Debug)]
pub struct SheetReader<'a, S: WorkbookSource + ?Sized> {
    source: &'a S,
    sheet_name: Option<String>,
    window: SheetWindow,
}

impl<'a, S: WorkbookSource + ?Sized> SheetReader<'a, S> {
    /// Create a reader over a source, targeting the first worksheet with an
    /// unbounded window.
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            sheet_name: None,
            window: SheetWindow::new(),
        }
    }

    /// Target a worksheet by name. A name that matches no worksheet falls
    /// back to the first one.
    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = Some(name.into());
        self
    }

    /// Restrict iteration to a window.
    pub fn window(mut self, window: SheetWindow) -> Self {
        self.window = window;
        self
    }

    /// Mutable access to the window for incremental bound setting.
    pub fn window_mut(&mut self) -> &mut SheetWindow {
        &mut self.window
    }

    /// Bind the reader and return the row iterator.
    ///
    /// Fails with [`SheetError::NoWorksheets`] when the source has no
    /// worksheets at all.
    pub fn rows(&self) -> SheetResult<RowIter<'a, S>> {
        let sheets = self.source.sheets();
        if sheets.is_empty() {
            return Err(SheetError::NoWorksheets);
        }

        let sheet = self
            .sheet_name
            .as_deref()
            .and_then(|name| sheets.iter().position(|meta| meta.name == name))
            .unwrap_or(0);

        let min_col = self.window.min_col().max(1);
        let max_col = match self.window.max_col() {
            0 => self.scan_max_col(sheet)?.max(min_col),
            bound => bound,
        };

        log::debug!(
            "bound sheet {:?}, columns {min_col}..={max_col}",
            sheets[sheet].name
        );

        Ok(RowIter {
            source: self.source,
            rows: self.source.rows(sheet)?,
            min_row: self.window.min_row(),
            max_row: self.window.max_row(),
            min_col,
            max_col,
            row_index: 0,
        })
    }

    /// Widest declared span across all rows of the sheet. Rows without a
    /// declared span fall back to their right-most cell.
    fn scan_max_col(&self, sheet: usize) -> SheetResult<u32> {
        let mut observed = 0u32;
        for row in self.source.rows(sheet)? {
            let row = row?;
            let span = match row.span_max {
                Some(span) => Some(span),
                None => row
                    .cells
                    .iter()
                    .filter_map(|cell| column::cell_ref_column_index(&cell.reference).ok())
                    .max(),
            };
            observed = observed.max(span.unwrap_or(0));
        }
        Ok(observed)
    }
}

/// Iterator over the materialized rows of a bound [`SheetReader`].
pub struct RowIter<'a, S: WorkbookSource + ?Sized> {
    source: &'a S,
    rows: Box<dyn Iterator<Item = SheetResult<RawRow>> + 'a>,
    min_row: u32,
    max_row: u32,
    min_col: u32,
    max_col: u32,
    row_index: u32,
}

impl<'a, S: WorkbookSource + ?Sized> RowIter<'a, S> {
    /// 1-based worksheet index of the most recently yielded row (0 before
    /// the first).
    pub fn row_index(&self) -> u32 {
        self.row_index
    }

    /// First worksheet column of the window.
    pub fn min_col(&self) -> u32 {
        self.min_col
    }

    /// Last worksheet column of the window.
    pub fn max_col(&self) -> u32 {
        self.max_col
    }

    /// Fixed width of every yielded row.
    pub fn width(&self) -> usize {
        (self.max_col - self.min_col + 1) as usize
    }

    /// Adapt this iterator into a record reader, carrying the window's
    /// column offset so that column-letter field names keep their true
    /// worksheet identity.
    pub fn into_records(self) -> RowReader<Self> {
        let offset = self.min_col;
        RowReader::new(self).column_offset(offset)
    }

    /// Locate each window column among the (possibly sparse, out-of-order)
    /// raw cells and resolve it; absent columns stay null.
    fn materialize(&self, row: &RawRow) -> SheetResult<Vec<Value>> {
        let mut values = vec![Value::Null; self.width()];
        for cell in &row.cells {
            let col = column::cell_ref_column_index(&cell.reference)?;
            if col >= self.min_col && col <= self.max_col {
                values[(col - self.min_col) as usize] = resolve_cell(cell, self.source)?;
            }
        }
        Ok(values)
    }
}

impl<'a, S: WorkbookSource + ?Sized> Iterator for RowIter<'a, S> {
    type Item = SheetResult<Vec<Value>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let row = match self.rows.next()? {
                Ok(row) => row,
                Err(e) => return Some(Err(e)),
            };
            if self.min_row != 0 && row.index < self.min_row {
                continue;
            }
            if self.max_row != 0 && row.index > self.max_row {
                continue;
            }
            self.row_index = row.index;
            return Some(self.materialize(&row));
        }
    }
}
