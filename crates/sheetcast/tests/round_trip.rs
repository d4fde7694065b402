//! Object -> sheet -> object round trips.

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use sheetcast::prelude::*;

#[derive(Debug, Default, Clone, PartialEq)]
struct Employee {
    id: i32,
    name: String,
    created: Option<NaiveDateTime>,
}

impl RecordModel for Employee {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("Id", ScalarKind::I32),
            FieldSpec::new("Name", ScalarKind::Text),
            FieldSpec::new("Created", ScalarKind::DateTime),
        ];
        FIELDS
    }

    fn get(&self, slot: usize) -> Value {
        match slot {
            0 => Value::from(self.id),
            1 => Value::from(self.name.clone()),
            2 => Value::from(self.created),
            _ => Value::Null,
        }
    }

    fn set(&mut self, slot: usize, value: Value) -> RecordResult<()> {
        match slot {
            0 => self.id = if value.is_null() { 0 } else { value.to_i32()? },
            1 => self.name = value.to_text(),
            2 => {
                self.created = if value.is_null() {
                    None
                } else {
                    Some(value.to_datetime()?)
                }
            }
            _ => {}
        }
        Ok(())
    }
}

fn created(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 12, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn sample() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            name: "Ann".into(),
            created: Some(created(1)),
        },
        Employee {
            id: 2,
            name: "Bo".into(),
            created: None,
        },
    ]
}

#[test]
fn round_trip_through_index_map() {
    let originals = sample();
    let rows: Vec<Vec<Value>> = originals.iter().map(to_row).collect();

    let entries: Vec<(String, usize)> = Employee::fields()
        .iter()
        .enumerate()
        .map(|(i, spec)| (spec.name.to_string(), i))
        .collect();
    let mut reader = RowReader::from_rows(rows)
        .header(HeaderSource::IndexMap)
        .index_map(entries);

    let mut restored = Vec::new();
    while reader.advance().unwrap() {
        restored.push(from_record::<Employee, _>(&reader).unwrap());
    }
    assert_eq!(restored, originals);
}

#[test]
fn round_trip_through_column_letters_and_json() {
    let originals = sample();
    let rows: Vec<Vec<Value>> = originals.iter().map(to_row).collect();

    // Field names are column letters; an external JSON map routes them back
    // to the schema names.
    let mut reader = RowReader::from_rows(rows);
    let json = r#"{"Id":"A","Name":"B","Created":"C"}"#;

    let mut restored = Vec::new();
    while reader.advance().unwrap() {
        restored.push(from_record_with_json::<Employee, _>(&reader, json).unwrap());
    }
    assert_eq!(restored, originals);
}

#[test]
fn round_trip_through_written_sheet() {
    let originals = sample();

    // Serialize to name-keyed records and write them out.
    let pairs: Vec<_> = originals.iter().map(to_pairs).collect();
    let mut records = RowReader::from_pairs(pairs);

    let mut sink = MemorySink::new();
    SheetWriter::write_records(&mut sink, "Employees", &mut records).unwrap();
    sink.close().unwrap();

    let rows = sink.sheet_rows(0).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][0].text, "Id");
    assert_eq!(rows[0][2].text, "Created");

    // Feed the written cells back through a memory workbook and map them
    // into objects again.
    let mut wb = MemoryWorkbook::new();
    let date_style = wb.add_style(14);
    let sheet = wb.add_sheet("Employees");
    for (i, row) in rows.iter().enumerate() {
        let raw: Vec<RawCell> = row
            .iter()
            .filter(|cell| !cell.text.is_empty())
            .map(|cell| {
                let reference = format!(
                    "{}{}",
                    column::index_to_letter(cell.column).unwrap(),
                    i + 1
                );
                let raw = RawCell::new(reference).with_text(cell.text.clone());
                match cell.role {
                    StyleRole::Date => raw.with_style(date_style),
                    _ => raw,
                }
            })
            .collect();
        wb.push_row(sheet, RawRow::new(i as u32 + 1, raw).with_span_max(3));
    }

    let mut reader = SheetReader::new(&wb)
        .rows()
        .unwrap()
        .into_records()
        .header(HeaderSource::FirstRow);

    let mut restored = Vec::new();
    while reader.advance().unwrap() {
        restored.push(from_record::<Employee, _>(&reader).unwrap());
    }
    assert_eq!(restored, originals);
}

#[test]
fn decimal_fields_round_to_six_digits() {
    #[derive(Debug, Default, PartialEq)]
    struct Price {
        amount: Decimal,
    }

    impl RecordModel for Price {
        fn fields() -> &'static [FieldSpec] {
            const FIELDS: &[FieldSpec] = &[FieldSpec::new("Amount", ScalarKind::Decimal)];
            FIELDS
        }

        fn get(&self, slot: usize) -> Value {
            match slot {
                0 => Value::from(self.amount),
                _ => Value::Null,
            }
        }

        fn set(&mut self, slot: usize, value: Value) -> RecordResult<()> {
            if slot == 0 && !value.is_null() {
                self.amount = value.to_decimal()?;
            }
            Ok(())
        }
    }

    // A float-sourced value carries no more than 6 fractional digits.
    let mut reader = RowReader::from_rows(vec![vec![Value::from(2.839_999_914_169_311_5_f64)]])
        .header(HeaderSource::IndexMap)
        .index_map(vec![("Amount".into(), 0)]);
    reader.advance().unwrap();

    let price: Price = from_record(&reader).unwrap();
    assert_eq!(price.amount, Decimal::new(284, 2));
}
