//! Raw cell to typed value resolution

use std::str::FromStr;

use rust_decimal::Decimal;

use sheetcast_core::{serial, Value};

use crate::error::{SheetError, SheetResult};
use crate::source::{RawCell, TypeTag, WorkbookSource};

/// Built-in number-format ids that render a number as a date or time.
///
/// An untagged numeric cell styled with one of these holds a serial date;
/// nothing in the cell itself says so — only its style does.
pub const DATE_FORMAT_IDS: [u32; 12] = [14, 15, 16, 17, 18, 19, 20, 21, 22, 45, 46, 47];

fn malformed(cell: &RawCell, message: &str) -> SheetError {
    SheetError::MalformedCell {
        reference: cell.reference.clone(),
        message: message.to_string(),
    }
}

/// Decode one raw cell into a typed [`Value`].
///
/// Untagged cells are disambiguated in order: date-formatted numeric text
/// becomes a date-time, numeric text becomes a number, blank text is null,
/// anything else is text verbatim. Note this means untyped text that merely
/// looks numeric (a product code like `"12345"`) is read as a number; the
/// source format does not distinguish the two.
///
/// Tagged cells: a boolean is kept as its 0/1 integer, an error cell is
/// null, a shared string is looked up in the source's table, an inline
/// string is text unless blank, and any other tag is null.
pub fn resolve_cell<S: WorkbookSource + ?Sized>(cell: &RawCell, source: &S) -> SheetResult<Value> {
    let Some(text) = cell.text.as_deref() else {
        return Ok(Value::Null);
    };

    let Some(tag) = cell.tag else {
        if let Some(fmt) = cell.style.and_then(|s| source.number_format_id(s)) {
            if DATE_FORMAT_IDS.contains(&fmt) {
                if let Ok(serial) = text.trim().parse::<f64>() {
                    let datetime = serial::datetime_from_serial(serial, source.is_date_1904())?;
                    return Ok(Value::DateTime(datetime));
                }
            }
        }
        if let Ok(number) = Decimal::from_str(text.trim()) {
            return Ok(Value::Number(number));
        }
        return Ok(if text.trim().is_empty() {
            Value::Null
        } else {
            Value::Text(text.to_string())
        });
    };

    match tag {
        TypeTag::Boolean => text
            .trim()
            .parse::<i32>()
            .map(Value::BoolInt)
            .map_err(|_| malformed(cell, "boolean payload is not an integer")),
        TypeTag::Error => Ok(Value::Null),
        TypeTag::SharedString => {
            let index = text
                .trim()
                .parse::<usize>()
                .map_err(|_| malformed(cell, "shared string payload is not an index"))?;
            let string = source
                .shared_string(index)
                .ok_or(SheetError::MissingSharedString(index))?;
            Ok(Value::Text(string.to_string()))
        }
        TypeTag::Str => Ok(if text.trim().is_empty() {
            Value::Null
        } else {
            Value::Text(text.to_string())
        }),
        TypeTag::Number | TypeTag::Unknown => Ok(Value::Null),
    }
}
