//! Schema-driven mapping between records and typed objects
//!
//! Where the original idea is "assign every matching property by name",
//! the mapping here is driven by an explicit descriptor table: a type
//! declares its scalar fields once, in a fixed order, and the mapper
//! resolves names against the record's field map at run time.

use sheetcast_core::Value;

use crate::error::RecordResult;
use crate::field_map::FieldMap;
use crate::header;
use crate::reader::RecordRead;

/// The scalar types a mapped field may have.
///
/// Nullable fields use the same kinds; nullability is the model's concern
/// (a null value arrives as [`Value::Null`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    I16,
    I32,
    I64,
    F32,
    F64,
    Decimal,
    Text,
    DateTime,
}

/// One field of a mapped type: its record name and scalar kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: ScalarKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: ScalarKind) -> Self {
        Self { name, kind }
    }
}

/// A type that can be mapped to and from records.
///
/// `fields` is the type's schema: declaration-ordered, stable across calls.
/// Slot indices passed to [`get`](RecordModel::get) and
/// [`set`](RecordModel::set) are positions in that slice.
pub trait RecordModel: Default {
    /// The ordered field schema of this type.
    fn fields() -> &'static [FieldSpec];

    /// Read the field at `slot` as a value.
    fn get(&self, slot: usize) -> Value;

    /// Assign the field at `slot`. The mapper passes either [`Value::Null`]
    /// or a value already converted to the field's declared kind.
    fn set(&mut self, slot: usize, value: Value) -> RecordResult<()>;
}

/// Convert a raw record value to a field's declared scalar kind.
fn convert_scalar(value: &Value, kind: ScalarKind) -> RecordResult<Value> {
    Ok(match kind {
        ScalarKind::I16 => Value::from(value.to_i16()?),
        ScalarKind::I32 => Value::from(value.to_i32()?),
        ScalarKind::I64 => Value::from(value.to_i64()?),
        ScalarKind::F32 => Value::from(value.to_f32()?),
        ScalarKind::F64 => Value::from(value.to_f64()?),
        ScalarKind::Decimal => Value::Number(value.to_decimal()?),
        ScalarKind::Text => Value::Text(value.to_text()),
        ScalarKind::DateTime => Value::DateTime(value.to_datetime()?),
    })
}

fn build<T: RecordModel, R: RecordRead + ?Sized>(
    reader: &R,
    lookup: impl Fn(&str) -> Option<usize>,
) -> RecordResult<T> {
    let mut object = T::default();
    for (slot, spec) in T::fields().iter().enumerate() {
        let Some(index) = lookup(spec.name) else {
            continue; // not in the record; the field keeps its default
        };
        let value = reader.value(index)?;
        let converted = if value.is_null() {
            Value::Null
        } else {
            convert_scalar(value, spec.kind)?
        };
        object.set(slot, converted)?;
    }
    Ok(object)
}

/// Materialize the reader's current record as a `T`, matching schema field
/// names against the reader's own field map. Schema fields the record does
/// not carry keep their `Default` value.
pub fn from_record<T: RecordModel, R: RecordRead + ?Sized>(reader: &R) -> RecordResult<T> {
    build(reader, |name| reader.field_index(name).ok())
}

/// Materialize the reader's current record as a `T`, resolving schema field
/// names through an external JSON column map instead of the reader's own
/// field map.
pub fn from_record_with_json<T: RecordModel, R: RecordRead + ?Sized>(
    reader: &R,
    json: &str,
) -> RecordResult<T> {
    let map: FieldMap = header::json_map(json, reader.field_count())?;
    build(reader, |name| map.index_of(name))
}

/// Serialize an object's schema fields to a positional row, in schema order.
pub fn to_row<T: RecordModel>(object: &T) -> Vec<Value> {
    T::fields()
        .iter()
        .enumerate()
        .map(|(slot, _)| object.get(slot))
        .collect()
}

/// Serialize an object's schema fields to `(name, value)` pairs, in schema
/// order.
pub fn to_pairs<T: RecordModel>(object: &T) -> Vec<(String, Value)> {
    T::fields()
        .iter()
        .enumerate()
        .map(|(slot, spec)| (spec.name.to_string(), object.get(slot)))
        .collect()
}
