//! Append-only sheet writing

use sheetcast_core::{serial, Value};
use sheetcast_records::RecordRead;

use crate::error::SheetResult;
use crate::source::{OutCell, OutTag, StyleRole, WorkbookSink};

/// Encode one value as an output cell for the given 1-based column.
///
/// This is the inverse of cell resolution: dates become serial numbers with
/// the `Date` style role, numerics become number cells, everything else is
/// written as a string. Which concrete style a role selects is the sink's
/// decision.
pub fn encode_value(value: &Value, column: u32) -> OutCell {
    match value {
        Value::Null => OutCell {
            column,
            text: String::new(),
            tag: OutTag::Str,
            role: StyleRole::Text,
        },
        Value::DateTime(datetime) => OutCell {
            column,
            text: serial::serial_from_datetime(datetime).to_string(),
            tag: OutTag::Number,
            role: StyleRole::Date,
        },
        Value::Number(number) => OutCell {
            column,
            text: number.to_string(),
            tag: OutTag::Number,
            role: StyleRole::Number,
        },
        Value::BoolInt(flag) => OutCell {
            column,
            text: flag.to_string(),
            tag: OutTag::Number,
            role: StyleRole::Number,
        },
        Value::Text(text) => OutCell {
            column,
            text: text.clone(),
            tag: OutTag::Str,
            role: StyleRole::Text,
        },
    }
}

/// Drives a record stream into a workbook sink, whole-sheet and
/// append-only.
pub struct SheetWriter;

impl SheetWriter {
    /// Write every record of `records` to a new sheet: one header row of
    /// field names, then one row per record, in field-map order.
    ///
    /// The first `advance` happens before the header is written because
    /// header resolution is lazy in the record layer. The sink is left
    /// open; the caller closes it when the whole document is assembled.
    pub fn write_records<K, R>(sink: &mut K, sheet_name: &str, records: &mut R) -> SheetResult<()>
    where
        K: WorkbookSink + ?Sized,
        R: RecordRead + ?Sized,
    {
        let sheet = sink.add_sheet(sheet_name)?;

        let mut has_record = records.advance()?;
        let count = records.field_count();

        let mut header = Vec::with_capacity(count);
        for i in 0..count {
            header.push(OutCell {
                column: i as u32 + 1,
                text: records.field_name(i)?.to_string(),
                tag: OutTag::Str,
                role: StyleRole::Header,
            });
        }
        sink.append_row(sheet, &header)?;

        let mut buffer = vec![Value::Null; count];
        while has_record {
            records.values(&mut buffer)?;
            let cells: Vec<OutCell> = buffer
                .iter()
                .enumerate()
                .map(|(i, value)| encode_value(value, i as u32 + 1))
                .collect();
            sink.append_row(sheet, &cells)?;
            has_record = records.advance()?;
        }

        Ok(())
    }
}
