//! Delimited text export of a filtered view
//!
//! Output is meant to open cleanly in a pt-BR spreadsheet: `;` between
//! fields, `,` as the decimal separator and a UTF-8 byte-order mark.

use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::config::ExportConfig;
use crate::error::Result;
use crate::error::util::safe_create_file;
use crate::models::{Dataset, PurchaseRequest};
use crate::reader::Cell;
use crate::schema::{
    COL_DATA_CRIACAO, COL_DIAS_EM_ABERTO, COL_PENDENTE_COM, COL_PROJETO, COL_REQUISITANTE,
    COL_SC, COL_VALOR, COL_WBS,
};
use crate::utils::logging::log_operation_complete;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write a view as delimited text
///
/// Writes a header row with [`Dataset::export_columns`] and one line per
/// row of the view, in view order. Returns the number of data lines.
pub fn write_csv<W: Write>(
    mut writer: W,
    dataset: &Dataset,
    rows: &[&PurchaseRequest],
    config: &ExportConfig,
) -> Result<usize> {
    if config.write_bom {
        writer.write_all(UTF8_BOM)?;
    }

    let columns = dataset.export_columns();
    let mut csv_writer = WriterBuilder::new()
        .delimiter(config.delimiter)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(&columns)?;

    for request in rows {
        let record = columns
            .iter()
            .map(|column| field_value(dataset, request, column, config.decimal_separator));
        csv_writer.write_record(record)?;
    }

    csv_writer.flush()?;
    Ok(rows.len())
}

/// Export a view to an in-memory buffer, as handed to a download widget
pub fn export_csv_bytes(
    dataset: &Dataset,
    rows: &[&PurchaseRequest],
    config: &ExportConfig,
) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, dataset, rows, config)?;
    Ok(buffer)
}

/// Export a view to a file, creating parent directories as needed
pub fn export_csv_file(
    path: &Path,
    dataset: &Dataset,
    rows: &[&PurchaseRequest],
    config: &ExportConfig,
) -> Result<usize> {
    let file = safe_create_file(path, "exporting the filtered view")?;
    let written = write_csv(std::io::BufWriter::new(file), dataset, rows, config)?;
    log_operation_complete("exported", path, written, None);
    Ok(written)
}

/// Format a float with the given decimal separator
///
/// Integral values keep one decimal digit (`1500,0`), matching how the
/// spreadsheet tooling the export is read with renders float columns.
#[must_use]
pub fn format_decimal(value: f64, separator: char) -> String {
    let text = format!("{value:?}");
    if separator == '.' {
        text
    } else {
        text.replace('.', &separator.to_string())
    }
}

fn field_value(dataset: &Dataset, request: &PurchaseRequest, column: &str, separator: char) -> String {
    match column {
        COL_SC => request.sc.clone(),
        COL_WBS => request.wbs.clone(),
        COL_VALOR => format_decimal(request.value, separator),
        COL_DATA_CRIACAO => request.created_on.format("%Y-%m-%d").to_string(),
        COL_REQUISITANTE => request.requester.clone(),
        COL_PENDENTE_COM => request.approver.clone(),
        COL_PROJETO => request.project.clone(),
        COL_DIAS_EM_ABERTO => request.days_open.to_string(),
        other => dataset
            .extra_index(other)
            .and_then(|idx| request.extras.get(idx))
            .map(|cell| extra_value(cell, separator))
            .unwrap_or_default(),
    }
}

fn extra_value(cell: &Cell, separator: char) -> String {
    match cell {
        Cell::Number(n) => format_decimal(*n, separator),
        other => other.as_text().unwrap_or_default(),
    }
}
