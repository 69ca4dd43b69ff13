use std::path::Path;

use crate::utils::reference_date;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use sc_urgency::DashboardConfig;
use sc_urgency::export::export_csv_bytes;
use sc_urgency::loader::load_requests;
use tempfile::TempDir;

const HEADER: [&str; 8] = [
    "SC",
    "WBS",
    "VALOR",
    "DATA CRIAÇÃO",
    "REQUISITANTE",
    "PENDENTE COM",
    "PROJETO",
    "QTD",
];

/// Four rows mixing typed and text cells:
/// a numeric SC with a date-formatted cell, a text SC with a text date,
/// a row without SC and a date stored as a bare serial number.
fn write_summary_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("dd/mm/yyyy");
    let sheet = workbook.add_worksheet();

    for (col, name) in HEADER.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }

    sheet.write_number(1, 0, 4_500_123.0).unwrap();
    sheet.write_string(1, 1, "W1").unwrap();
    sheet.write_number(1, 2, 1500.5).unwrap();
    let created = ExcelDateTime::from_ymd(2024, 12, 1).unwrap();
    sheet.write_datetime_with_format(1, 3, &created, &date_format).unwrap();
    sheet.write_string(1, 4, "Ana").unwrap();
    sheet.write_string(1, 5, "Caio").unwrap();
    sheet.write_string(1, 6, "Linha Norte").unwrap();
    sheet.write_number(1, 7, 3.0).unwrap();

    sheet.write_string(2, 0, "1002").unwrap();
    sheet.write_string(2, 1, "W2").unwrap();
    sheet.write_number(2, 2, 200.0).unwrap();
    sheet.write_string(2, 3, "15/11/2024").unwrap();
    sheet.write_string(2, 4, "Bia").unwrap();
    sheet.write_string(2, 5, "Duda").unwrap();
    sheet.write_string(2, 6, "Sul").unwrap();

    sheet.write_string(3, 1, "W3").unwrap();
    sheet.write_number(3, 2, 10.0).unwrap();
    sheet.write_string(3, 3, "01/12/2024").unwrap();
    sheet.write_string(3, 4, "Ana").unwrap();

    sheet.write_string(4, 0, "1004").unwrap();
    sheet.write_string(4, 1, "W4").unwrap();
    sheet.write_number(4, 2, 50.0).unwrap();
    sheet.write_number(4, 3, 45_292.0).unwrap();
    sheet.write_string(4, 4, "Caio").unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_load_typed_workbook() -> sc_urgency::Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resumo.xlsx");
    write_summary_workbook(&path);

    let config = DashboardConfig::for_source(&path).with_reference_date(reference_date());
    let dataset = load_requests(&config)?;

    let report = dataset.report();
    assert_eq!(report.rows_read, 4);
    assert_eq!(report.dropped_missing_sc, 1);
    assert_eq!(report.dropped_invalid_date, 0);

    let sc: Vec<&str> = dataset.rows().iter().map(|r| r.sc.as_str()).collect();
    assert_eq!(sc, ["4500123", "1002", "1004"]);

    let days: Vec<u32> = dataset.rows().iter().map(|r| r.days_open).collect();
    assert_eq!(days, [30, 46, 365]);

    let first = &dataset.rows()[0];
    assert!((first.value - 1500.5).abs() < 1e-9);
    assert_eq!(first.composite_key, "4500123-W1");
    assert_eq!(dataset.extra_columns(), ["QTD"]);
    Ok(())
}

#[test]
fn test_export_typed_workbook() -> sc_urgency::Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resumo.xlsx");
    write_summary_workbook(&path);

    let config = DashboardConfig::for_source(&path).with_reference_date(reference_date());
    let dataset = load_requests(&config)?;
    let view = dataset.view();

    let mut export = config.export.clone();
    export.write_bom = false;
    let bytes = export_csv_bytes(&dataset, &view, &export)?;
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[..3],
        [
            "SC;WBS;VALOR;DATA CRIAÇÃO;REQUISITANTE;PENDENTE COM;PROJETO;QTD;DIAS EM ABERTO",
            "4500123;W1;1500,5;2024-12-01;Ana;Caio;Linha Norte;3,0;30",
            "1002;W2;200,0;2024-11-15;Bia;Duda;Sul;;46",
        ]
    );
    Ok(())
}
