//! Header resolution strategies
//!
//! Four ways to decide what the columns of a row stream are called. Every
//! strategy resolves into the same canonical [`FieldMap`] exactly once, on
//! the reader's first advance.

use sheetcast_core::column;
use sheetcast_core::Value;

use crate::error::{RecordError, RecordResult};
use crate::field_map::FieldMap;

/// Where a reader's field names come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderSource {
    /// The first upstream row supplies the names and is consumed.
    FirstRow,

    /// Synthetic names: spreadsheet column letters, offset so they reflect
    /// true worksheet column identity even for a window that starts past
    /// column A.
    #[default]
    ColumnLetters,

    /// An external flat JSON object of name -> column letter.
    JsonMap,

    /// A caller-supplied name -> index mapping, used verbatim.
    IndexMap,
}

/// Build a map from a header row. A null cell at position `i` becomes a
/// synthetic `NoName` entry, zero-padded to the digit count of the row
/// length.
pub(crate) fn first_row_map(header: &[Value]) -> RecordResult<FieldMap> {
    let pad = header.len().to_string().len();
    let mut map = FieldMap::new();
    for (i, value) in header.iter().enumerate() {
        let name = if value.is_null() {
            format!("NoName{:0pad$}", i)
        } else {
            value.to_text()
        };
        map.insert(name, i)?;
    }
    Ok(map)
}

/// Build a map of column letter names. `offset` is the 1-based worksheet
/// column of the first field (a window's `min_col`; 1 when there is no
/// window).
pub(crate) fn column_letters_map(count: usize, offset: u32) -> RecordResult<FieldMap> {
    let mut map = FieldMap::new();
    for i in 0..count {
        map.insert(column::index_to_letter(i as u32 + offset)?, i)?;
    }
    Ok(map)
}

/// Parse an external JSON column map and filter it to the record width.
///
/// The document must be a flat object whose values are column letters.
/// Values that do not parse as a column are dropped, not errors; parsed
/// letters are normalized to zero-based indices and entries addressing a
/// column at or past `field_count` are dropped as well.
pub(crate) fn json_map(json: &str, field_count: usize) -> RecordResult<FieldMap> {
    let doc: serde_json::Value = serde_json::from_str(json)?;
    let entries = doc.as_object().ok_or(RecordError::JsonMapNotFlat)?;

    let mut map = FieldMap::new();
    for (name, value) in entries {
        let letters = value.as_str().ok_or(RecordError::JsonMapNotFlat)?;
        let index = match column::letter_to_index(letters) {
            Ok(one_based) => (one_based - 1) as usize,
            Err(_) => {
                log::warn!("dropping column map entry {name:?}: {letters:?} is not a column");
                continue;
            }
        };
        if index < field_count {
            map.insert(name.clone(), index)?;
        }
    }
    Ok(map)
}
