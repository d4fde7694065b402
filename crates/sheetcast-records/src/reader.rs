//! The record reader contract and the header-mapped row adapter

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sheetcast_core::Value;

use crate::error::{RecordError, RecordResult};
use crate::field_map::FieldMap;
use crate::header::{self, HeaderSource};

/// Forward-only cursor over name-addressable records.
///
/// One contract for every source shape: a windowed worksheet scan, a plain
/// vector of rows, or name-keyed records. Positional accessors address the
/// raw row slots; name lookups go through the resolved [`FieldMap`].
pub trait RecordRead {
    /// Move to the next record. Returns `false` at the end of the stream.
    ///
    /// The first call resolves the header strategy into the field map;
    /// configuration errors (a required external map that was never set)
    /// surface here, not at construction.
    fn advance(&mut self) -> RecordResult<bool>;

    /// Number of fields (0 before the first `advance`).
    fn field_count(&self) -> usize;

    /// Field name at ordinal position `i`.
    fn field_name(&self, i: usize) -> RecordResult<&str>;

    /// Column index a field name maps to.
    fn field_index(&self, name: &str) -> RecordResult<usize>;

    /// Value at raw row position `i`.
    fn value(&self, i: usize) -> RecordResult<&Value>;

    /// Value addressed by field name.
    fn value_by_name(&self, name: &str) -> RecordResult<&Value> {
        let i = self.field_index(name)?;
        self.value(i)
    }

    /// Whether the value at raw row position `i` is null.
    fn is_null(&self, i: usize) -> RecordResult<bool> {
        Ok(self.value(i)?.is_null())
    }

    /// Copy the current record's values into `out` in field-map order,
    /// returning how many were written.
    fn values(&self, out: &mut [Value]) -> RecordResult<usize> {
        let n = self.field_count().min(out.len());
        for (slot, cell) in out.iter_mut().enumerate().take(n) {
            let index = self.field_index(self.field_name(slot)?)?;
            *cell = self.value(index)?.clone();
        }
        Ok(n)
    }

    /// Typed accessor: decimal.
    fn get_decimal(&self, i: usize) -> RecordResult<Decimal> {
        Ok(self.value(i)?.to_decimal()?)
    }

    /// Typed accessor: `f64`.
    fn get_f64(&self, i: usize) -> RecordResult<f64> {
        Ok(self.value(i)?.to_f64()?)
    }

    /// Typed accessor: `f32`.
    fn get_f32(&self, i: usize) -> RecordResult<f32> {
        Ok(self.value(i)?.to_f32()?)
    }

    /// Typed accessor: `i64`.
    fn get_i64(&self, i: usize) -> RecordResult<i64> {
        Ok(self.value(i)?.to_i64()?)
    }

    /// Typed accessor: `i32`.
    fn get_i32(&self, i: usize) -> RecordResult<i32> {
        Ok(self.value(i)?.to_i32()?)
    }

    /// Typed accessor: `i16`.
    fn get_i16(&self, i: usize) -> RecordResult<i16> {
        Ok(self.value(i)?.to_i16()?)
    }

    /// Typed accessor: text form of any value (null becomes `""`).
    fn get_string(&self, i: usize) -> RecordResult<String> {
        Ok(self.value(i)?.to_text())
    }

    /// Typed accessor: date-time, with serial interpretation of numerics.
    fn get_datetime(&self, i: usize) -> RecordResult<NaiveDateTime> {
        Ok(self.value(i)?.to_datetime()?)
    }
}

/// Rows already collected in memory, as the adapter's iterator type.
pub type VecRows = std::vec::IntoIter<RecordResult<Vec<Value>>>;

/// Header-mapped adapter exposing any ordered sequence of fixed-width rows
/// as a [`RecordRead`].
///
/// The field map is computed exactly once, on the first
/// [`advance`](RecordRead::advance), and is stable for the reader's
/// lifetime.
/// Changing the shape of the underlying source after construction is a
/// precondition violation; it is not guarded.
#[derive(Debug)]
pub struct RowReader<I> {
    rows: I,
    header: HeaderSource,
    json_map: Option<String>,
    index_map: Option<Vec<(String, usize)>>,
    column_offset: u32,
    map: Option<FieldMap>,
    pending: Option<Vec<Value>>,
    current: Option<Vec<Value>>,
}

impl<I> RowReader<I> {
    /// Wrap a fallible row iterator. The default header strategy is
    /// [`HeaderSource::ColumnLetters`].
    pub fn new(rows: I) -> Self {
        Self {
            rows,
            header: HeaderSource::default(),
            json_map: None,
            index_map: None,
            column_offset: 1,
            map: None,
            pending: None,
            current: None,
        }
    }

    /// Select the header strategy. Must be called before the first advance;
    /// the resolved field map never changes afterwards.
    pub fn header(mut self, header: HeaderSource) -> Self {
        self.header = header;
        self
    }

    /// Supply the external JSON column map for [`HeaderSource::JsonMap`].
    pub fn json_map(mut self, json: impl Into<String>) -> Self {
        self.json_map = Some(json.into());
        self
    }

    /// Supply the name -> index entries for [`HeaderSource::IndexMap`].
    pub fn index_map(mut self, entries: Vec<(String, usize)>) -> Self {
        self.index_map = Some(entries);
        self
    }

    /// 1-based worksheet column of the first row slot, used by
    /// [`HeaderSource::ColumnLetters`] to name fields after their true
    /// worksheet columns. Defaults to 1.
    pub fn column_offset(mut self, min_col: u32) -> Self {
        self.column_offset = min_col.max(1);
        self
    }

    fn field_map(&self) -> RecordResult<&FieldMap> {
        self.map.as_ref().ok_or(RecordError::NoCurrentRecord)
    }

    fn current_row(&self) -> RecordResult<&Vec<Value>> {
        self.current.as_ref().ok_or(RecordError::NoCurrentRecord)
    }
}

impl RowReader<VecRows> {
    /// Adapt rows already collected in memory.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Self {
        let items: Vec<RecordResult<Vec<Value>>> = rows.into_iter().map(Ok).collect();
        Self::new(items.into_iter())
    }

    /// Adapt name-keyed records. The field map is derived from the key
    /// order of the first record; every record is converted to a positional
    /// row, and the reader behaves as [`HeaderSource::IndexMap`] thereafter.
    pub fn from_pairs(records: Vec<Vec<(String, Value)>>) -> Self {
        let entries: Vec<(String, usize)> = records
            .first()
            .map(|record| {
                record
                    .iter()
                    .enumerate()
                    .map(|(i, (name, _))| (name.clone(), i))
                    .collect()
            })
            .unwrap_or_default();

        let rows: Vec<RecordResult<Vec<Value>>> = records
            .into_iter()
            .map(|record| Ok(record.into_iter().map(|(_, value)| value).collect()))
            .collect();

        Self::new(rows.into_iter())
            .header(HeaderSource::IndexMap)
            .index_map(entries)
    }
}

impl<I, E> RowReader<I>
where
    I: Iterator<Item = Result<Vec<Value>, E>>,
    RecordError: From<E>,
{
    fn resolve_map(&mut self) -> RecordResult<()> {
        let first = match self.rows.next() {
            Some(row) => Some(row.map_err(RecordError::from)?),
            None => None,
        };
        let width = first.as_ref().map(Vec::len).unwrap_or(0);

        let map = match self.header {
            HeaderSource::FirstRow => match &first {
                Some(row) => header::first_row_map(row)?,
                None => FieldMap::new(),
            },
            HeaderSource::ColumnLetters => header::column_letters_map(width, self.column_offset)?,
            HeaderSource::JsonMap => {
                let json = self
                    .json_map
                    .as_deref()
                    .ok_or(RecordError::MapNotSet("JSON column map"))?;
                header::json_map(json, width)?
            }
            HeaderSource::IndexMap => {
                let entries = self
                    .index_map
                    .as_ref()
                    .ok_or(RecordError::MapNotSet("index map"))?;
                let mut map = FieldMap::new();
                for (name, index) in entries {
                    map.insert(name.clone(), *index)?;
                }
                map
            }
        };

        // The first row is consumed by name resolution only when it *was*
        // the header; otherwise it is replayed as the first record.
        if self.header != HeaderSource::FirstRow {
            self.pending = first;
        }
        self.map = Some(map);
        Ok(())
    }
}

impl<I, E> RecordRead for RowReader<I>
where
    I: Iterator<Item = Result<Vec<Value>, E>>,
    RecordError: From<E>,
{
    fn advance(&mut self) -> RecordResult<bool> {
        if self.map.is_none() {
            self.resolve_map()?;
        }

        if let Some(row) = self.pending.take() {
            self.current = Some(row);
            return Ok(true);
        }

        match self.rows.next() {
            Some(row) => {
                self.current = Some(row.map_err(RecordError::from)?);
                Ok(true)
            }
            None => {
                self.current = None;
                Ok(false)
            }
        }
    }

    fn field_count(&self) -> usize {
        self.map.as_ref().map(FieldMap::len).unwrap_or(0)
    }

    fn field_name(&self, i: usize) -> RecordResult<&str> {
        let map = self.field_map()?;
        map.name(i)
            .ok_or_else(|| RecordError::SlotOutOfRange(i, map.len()))
    }

    fn field_index(&self, name: &str) -> RecordResult<usize> {
        self.field_map()?
            .index_of(name)
            .ok_or_else(|| RecordError::FieldNotFound(name.into()))
    }

    fn value(&self, i: usize) -> RecordResult<&Value> {
        let row = self.current_row()?;
        row.get(i)
            .ok_or_else(|| RecordError::SlotOutOfRange(i, row.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows(data: &[&[&str]]) -> Vec<Vec<Value>> {
        data.iter()
            .map(|row| row.iter().map(|s| Value::from(*s)).collect())
            .collect()
    }

    #[test]
    fn test_first_row_header() {
        let mut reader = RowReader::from_rows(rows(&[&["Name", "Age"], &["Ann", "30"]]))
            .header(HeaderSource::FirstRow);

        assert!(reader.advance().unwrap());
        assert_eq!(reader.field_count(), 2);
        assert_eq!(reader.field_name(0).unwrap(), "Name");
        assert_eq!(reader.value_by_name("Name").unwrap(), &Value::from("Ann"));
        assert_eq!(reader.get_string(1).unwrap(), "30");
        assert!(!reader.advance().unwrap());
    }

    #[test]
    fn test_column_letters_header() {
        let mut reader = RowReader::from_rows(rows(&[&["Name", "Age"], &["Ann", "30"]]));

        assert!(reader.advance().unwrap());
        assert_eq!(reader.field_count(), 2);
        assert_eq!(reader.field_name(0).unwrap(), "A");
        assert_eq!(reader.field_name(1).unwrap(), "B");
        // No header row is consumed.
        assert_eq!(reader.value(0).unwrap(), &Value::from("Name"));
        assert!(reader.advance().unwrap());
        assert_eq!(reader.value(0).unwrap(), &Value::from("Ann"));
        assert!(!reader.advance().unwrap());
    }

    #[test]
    fn test_column_letters_with_offset() {
        let mut reader =
            RowReader::from_rows(rows(&[&["x", "y", "z"]])).column_offset(2);
        assert!(reader.advance().unwrap());
        assert_eq!(reader.field_name(0).unwrap(), "B");
        assert_eq!(reader.field_name(2).unwrap(), "D");
    }

    #[test]
    fn test_json_map_header() {
        let mut reader = RowReader::from_rows(rows(&[&["Ann", "30", "Oslo"]]))
            .header(HeaderSource::JsonMap)
            .json_map(r#"{"Name":"A","Age":"B","Ignored":"1A"}"#);

        assert!(reader.advance().unwrap());
        assert_eq!(reader.field_count(), 2);
        assert_eq!(
            reader.value_by_name("Age").unwrap(),
            &Value::from("30")
        );
        assert!(matches!(
            reader.field_index("Ignored"),
            Err(RecordError::FieldNotFound(_))
        ));
    }

    #[test]
    fn test_json_map_missing_is_configuration_error() {
        let mut reader =
            RowReader::from_rows(rows(&[&["Ann"]])).header(HeaderSource::JsonMap);
        assert!(matches!(
            reader.advance(),
            Err(RecordError::MapNotSet(_))
        ));
    }

    #[test]
    fn test_index_map_header() {
        let mut reader = RowReader::from_rows(rows(&[&["Ann", "30"]]))
            .header(HeaderSource::IndexMap)
            .index_map(vec![("Name".into(), 0), ("Age".into(), 1)]);

        assert!(reader.advance().unwrap());
        assert_eq!(reader.field_index("Age").unwrap(), 1);
        assert_eq!(reader.get_i32(1).unwrap(), 30);
    }

    #[test]
    fn test_from_pairs() {
        let records = vec![
            vec![
                ("Project".to_string(), Value::from("X382")),
                ("Money".to_string(), Value::from(5884.548f64)),
            ],
            vec![
                ("Project".to_string(), Value::from("X386")),
                ("Money".to_string(), Value::from(2884.57f64)),
            ],
        ];
        let mut reader = RowReader::from_pairs(records);

        assert!(reader.advance().unwrap());
        assert_eq!(reader.field_name(0).unwrap(), "Project");
        assert_eq!(reader.get_string(0).unwrap(), "X382");
        assert!(reader.advance().unwrap());
        assert_eq!(reader.get_string(0).unwrap(), "X386");
        assert!(!reader.advance().unwrap());
    }

    #[test]
    fn test_values_bulk_copy() {
        let mut reader = RowReader::from_rows(rows(&[&["Name", "Age"], &["Ann", "30"]]))
            .header(HeaderSource::FirstRow);
        reader.advance().unwrap();

        let mut out = vec![Value::Null; reader.field_count()];
        let n = reader.values(&mut out).unwrap();
        assert_eq!(n, 2);
        assert_eq!(out, vec![Value::from("Ann"), Value::from("30")]);
    }

    #[test]
    fn test_access_before_advance() {
        let reader = RowReader::from_rows(rows(&[&["Ann"]]));
        assert_eq!(reader.field_count(), 0);
        assert!(matches!(
            reader.value(0),
            Err(RecordError::NoCurrentRecord)
        ));
        assert!(matches!(
            reader.field_name(0),
            Err(RecordError::NoCurrentRecord)
        ));
    }

    #[test]
    fn test_empty_source() {
        let mut reader = RowReader::from_rows(Vec::new()).header(HeaderSource::FirstRow);
        assert!(!reader.advance().unwrap());
        assert_eq!(reader.field_count(), 0);
    }

    #[test]
    fn test_nulls() {
        let mut reader =
            RowReader::from_rows(vec![vec![Value::Null, Value::from(1i32)]]);
        reader.advance().unwrap();
        assert!(reader.is_null(0).unwrap());
        assert!(!reader.is_null(1).unwrap());
        assert_eq!(reader.get_string(0).unwrap(), "");
    }
}
