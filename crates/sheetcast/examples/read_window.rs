//! Read a window of an in-memory worksheet as named records.

use sheetcast::prelude::*;

fn main() {
    let mut workbook = MemoryWorkbook::new();
    let date_style = workbook.add_style(14);

    let sheet = workbook.add_sheet("Employees");
    workbook.push_row(
        sheet,
        RawRow::new(
            1,
            vec![
                RawCell::new("A1").with_text("Id"),
                RawCell::new("B1").with_text("Name"),
                RawCell::new("C1").with_text("Hired"),
            ],
        )
        .with_span_max(3),
    );
    workbook.push_row(
        sheet,
        RawRow::new(
            2,
            vec![
                RawCell::new("A2").with_text("1"),
                RawCell::new("B2").with_text("Ann"),
                RawCell::new("C2").with_text("44958").with_style(date_style),
            ],
        )
        .with_span_max(3),
    );

    let mut records = SheetReader::new(&workbook)
        .sheet_name("Employees")
        .rows()
        .expect("bind worksheet")
        .into_records()
        .header(HeaderSource::FirstRow);

    while records.advance().expect("read record") {
        let id = records.value_by_name("Id").expect("Id field");
        let name = records.value_by_name("Name").expect("Name field");
        let hired = records.value_by_name("Hired").expect("Hired field");
        println!("{id} {name} hired {hired}");
    }
}
