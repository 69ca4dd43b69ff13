//! Module for reading the raw SC summary sheet.
//!
//! The reader knows nothing about purchase requests: it turns a workbook or a
//! delimited text file into a header row plus rows of typed cells. Cleaning
//! happens in [`crate::loader`].

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use calamine::{Data, Reader, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime};

use crate::error::util::{ensure_source_file, safe_open_file};
use crate::error::{DashboardError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Blank cell, error cell or empty delimited field
    Empty,
    /// Text content, untrimmed
    Text(String),
    /// Any numeric cell (integers included)
    Number(f64),
    /// A cell the workbook stores as a date or date-time
    Date(NaiveDateTime),
    /// Boolean cell
    Bool(bool),
}

impl Cell {
    /// Whether the cell holds no value at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Render the cell as text, `None` for empty cells
    ///
    /// Integral numbers drop their fractional part so that identifiers typed
    /// as numbers in the workbook read back as `4500123`, not `4500123.0`.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Text(s) => Some(s.clone()),
            Self::Number(n) => Some(format_number(*n)),
            Self::Date(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            Self::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Self::Empty,
            Data::String(s) => Self::Text(s.clone()),
            Data::Int(i) => Self::Number(*i as f64),
            Data::Float(f) => Self::Number(*f),
            Data::Bool(b) => Self::Bool(*b),
            Data::DateTime(dt) => dt
                .as_datetime()
                .map_or_else(|| Self::Number(dt.as_f64()), Self::Date),
            Data::DateTimeIso(s) => parse_iso_datetime(s).map_or_else(|| Self::Text(s.clone()), Self::Date),
            Data::DurationIso(s) => Self::Text(s.clone()),
        }
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// A header row plus the data rows below it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Column names, blank names replaced by `Unnamed: <index>`
    pub header: Vec<String>,
    /// Data rows; a row may be shorter than the header
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Build a table, normalizing blank header names
    #[must_use]
    pub fn new(header: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let header = header
            .into_iter()
            .enumerate()
            .map(|(idx, name)| {
                let name = name.trim().to_string();
                if name.is_empty() {
                    format!("Unnamed: {idx}")
                } else {
                    name
                }
            })
            .collect();
        Self { header, rows }
    }

    /// Cell at a row and column, `Empty` past the end of a short row
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        const EMPTY: &Cell = &Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(EMPTY)
    }

    /// Number of data rows
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}

/// Supported source layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Excel or OpenDocument workbook, first worksheet
    Workbook,
    /// Delimited text with a header line
    Delimited,
}

impl SourceFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "xla" | "ods" => Ok(Self::Workbook),
            "csv" | "txt" => Ok(Self::Delimited),
            _ => Err(DashboardError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Read the source file into a raw table
///
/// # Errors
/// `SourceNotFound` when the file does not exist; any other variant when the
/// file exists but cannot be decoded.
pub fn read_source(path: &Path) -> Result<RawTable> {
    ensure_source_file(path, "reading the SC summary")?;
    let start = Instant::now();
    log_operation_start("Reading SC summary", path);

    let table = match SourceFormat::from_path(path)? {
        SourceFormat::Workbook => read_workbook(path)?,
        SourceFormat::Delimited => read_delimited(path)?,
    };

    log_operation_complete("read", path, table.num_rows(), Some(start.elapsed()));
    Ok(table)
}

/// Read the first worksheet of a workbook
pub fn read_workbook(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DashboardError::EmptyWorkbook {
            path: path.to_path_buf(),
        })??;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| DashboardError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?
        .iter()
        .map(|data| Cell::from(data).as_text().unwrap_or_default())
        .collect();

    let rows = rows
        .map(|row| row.iter().map(Cell::from).collect())
        .collect();

    Ok(RawTable::new(header, rows))
}

/// Read a delimited text file
///
/// A leading UTF-8 byte-order mark is skipped and the delimiter is sniffed
/// from the header line (`;` when it outnumbers `,`).
pub fn read_delimited(path: &Path) -> Result<RawTable> {
    let mut file = safe_open_file(path, "reading delimited SC summary")?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    parse_delimited(&bytes)
}

/// Parse delimited text already held in memory
pub fn parse_delimited(bytes: &[u8]) -> Result<RawTable> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let delimiter = sniff_delimiter(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let header = reader.headers()?.iter().map(ToString::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(field.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(RawTable::new(header, rows))
}

fn sniff_delimiter(bytes: &[u8]) -> u8 {
    let first_line = bytes.split(|b| *b == b'\n').next().unwrap_or_default();
    let semicolons = first_line.iter().filter(|b| **b == b';').count();
    let commas = first_line.iter().filter(|b| **b == b',').count();
    if semicolons > commas { b';' } else { b',' }
}
