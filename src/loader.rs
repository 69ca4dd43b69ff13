//! SC summary loading and cleaning
//!
//! Reads the source sheet, discards invalid rows, coerces types and derives
//! the computed fields. Loads are memoized per source identity by
//! [`DatasetCache`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use chrono::NaiveDate;

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::models::dataset::extra_columns_of;
use crate::models::{Dataset, LoadReport, PurchaseRequest};
use crate::reader::{Cell, RawTable, read_source};
use crate::schema::{ColumnIndex, excel_serial_to_date, parse_date_string};
use crate::utils::logging::log_load_report;

/// Load and clean the configured source
///
/// The returned dataset is stamped with the current local time.
pub fn load_requests(config: &DashboardConfig) -> Result<Dataset> {
    let path = config.source_path.as_path();
    let raw = read_source(path)?;
    let dataset = clean_table(&raw, config, config.today())?
        .with_load_info(chrono::Local::now().naive_local(), path);

    log_load_report(&dataset.report(), path);

    Ok(dataset)
}

/// Clean a raw table into a dataset
///
/// # Arguments
/// * `raw` - Header and cells as read from the source
/// * `config` - Placeholders and date formats
/// * `today` - Reference date for days open
///
/// # Errors
/// Returns a schema error if `SC`, `VALOR` or `DATA CRIAÇÃO` is missing
pub fn clean_table(raw: &RawTable, config: &DashboardConfig, today: NaiveDate) -> Result<Dataset> {
    let index = ColumnIndex::from_header(&raw.header)?;
    let extra_positions: Vec<usize> = extra_columns_of(&raw.header)
        .iter()
        .filter_map(|name| raw.header.iter().position(|h| h == name))
        .collect();

    let mut report = LoadReport {
        rows_read: raw.num_rows(),
        ..LoadReport::default()
    };
    let mut rows = Vec::with_capacity(raw.num_rows());

    for row in 0..raw.num_rows() {
        let Some(sc) = clean_identifier(raw.cell(row, index.sc)) else {
            report.dropped_missing_sc += 1;
            log::debug!("Dropping row {}: missing SC", row + 2);
            continue;
        };

        let Some(created_on) = parse_creation_date(raw.cell(row, index.data_criacao), config) else {
            report.dropped_invalid_date += 1;
            log::debug!("Dropping SC {sc}: invalid creation date");
            continue;
        };

        let value = match coerce_value(raw.cell(row, index.valor)) {
            Some(value) => value,
            None => {
                report.values_coerced += 1;
                0.0
            }
        };

        let category = |col: Option<usize>, placeholder: &str| {
            col.and_then(|c| raw.cell(row, c).as_text())
                .unwrap_or_else(|| placeholder.to_string())
        };

        let wbs = category(index.wbs, &config.unassigned_placeholder)
            .trim()
            .to_string();
        let requester = category(index.requisitante, &config.uninformed_placeholder);
        let approver = category(index.pendente_com, &config.uninformed_placeholder);
        let project = category(index.projeto, &config.uninformed_placeholder);

        let extras = extra_positions
            .iter()
            .map(|&col| raw.cell(row, col).clone())
            .collect();

        rows.push(
            PurchaseRequest::new(sc, wbs, requester, approver, project, value, created_on, today)
                .with_extras(extras),
        );
    }

    Ok(Dataset::new(rows, raw.header.clone(), report))
}

/// Trimmed SC, `None` for blank cells and for the literal `nan`
fn clean_identifier(cell: &Cell) -> Option<String> {
    let sc = cell.as_text()?.trim().to_string();
    if sc.is_empty() || sc.eq_ignore_ascii_case("nan") {
        None
    } else {
        Some(sc)
    }
}

/// Creation date from a date cell, an Excel serial or text
///
/// The time of day is dropped, so days open counts calendar days between
/// the creation date and the reference date.
fn parse_creation_date(cell: &Cell, config: &DashboardConfig) -> Option<NaiveDate> {
    match cell {
        Cell::Date(datetime) => Some(datetime.date()),
        Cell::Number(serial) => excel_serial_to_date(*serial),
        Cell::Text(text) => parse_date_string(text, &config.date_format_config),
        Cell::Empty | Cell::Bool(_) => None,
    }
}

/// Numeric value of a cell, `None` when it must be coerced to zero
///
/// Negative and non-finite numbers count as non-numeric.
fn coerce_value(cell: &Cell) -> Option<f64> {
    let value = match cell {
        Cell::Number(n) => *n,
        Cell::Bool(b) => f64::from(u8::from(*b)),
        Cell::Text(text) => parse_decimal(text)?,
        Cell::Empty | Cell::Date(_) => return None,
    };

    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Parse a number written with either `.` or `,` as decimal separator
///
/// A currency prefix and spaces are ignored. When both separators appear,
/// the last one is the decimal separator. A lone comma is a decimal
/// separator; repeated dots or commas are thousands separators.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .trim_start_matches("R$")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let last_dot = cleaned.rfind('.');
    let last_comma = cleaned.rfind(',');
    let normalized = match (last_dot, last_comma) {
        (Some(dot), Some(comma)) if comma > dot => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (None, Some(_)) if cleaned.matches(',').count() == 1 => cleaned.replace(',', "."),
        (None, Some(_)) => cleaned.replace(',', ""),
        (Some(_), None) if cleaned.matches('.').count() > 1 => cleaned.replace('.', ""),
        _ => cleaned,
    };

    normalized.parse::<f64>().ok()
}

/// User-visible result of a load attempt
///
/// A failed load is a normal state for the dashboard: it carries the message
/// to show and behaves like an empty dataset.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The source was read and cleaned
    Loaded(Arc<Dataset>),
    /// The source was missing or unreadable
    Failed {
        /// Message for the user
        message: String,
    },
}

impl LoadOutcome {
    /// Map a load result to an outcome, building the user message on failure
    #[must_use]
    pub fn from_result(result: Result<Arc<Dataset>>, source: &Path) -> Self {
        match result {
            Ok(dataset) => Self::Loaded(dataset),
            Err(err) => {
                log::error!("Failed to load {}: {err}", source.display());
                Self::Failed {
                    message: user_message(&err, source),
                }
            }
        }
    }

    /// The loaded dataset, or an empty one after a failure
    #[must_use]
    pub fn dataset(&self) -> Arc<Dataset> {
        match self {
            Self::Loaded(dataset) => Arc::clone(dataset),
            Self::Failed { .. } => Arc::new(Dataset::empty()),
        }
    }

    /// The failure message, if any
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed { message } => Some(message.as_str()),
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Message shown to the user for a load error
#[must_use]
pub fn user_message(err: &DashboardError, source: &Path) -> String {
    if err.is_not_found() {
        format!(
            "ERRO CRÍTICO: Arquivo de resumo '{}' não foi encontrado.",
            source.display()
        )
    } else {
        format!("Ocorreu um erro ao ler o arquivo de resumo: {err}")
    }
}

/// What makes two loads interchangeable
///
/// The reference date is part of the key: days open changes with it even
/// when the file does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceIdentity {
    path: PathBuf,
    len: u64,
    modified: Option<SystemTime>,
    today: NaiveDate,
}

impl SourceIdentity {
    /// Identity of a source file as of now
    pub fn of(path: &Path, today: NaiveDate) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DashboardError::SourceNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DashboardError::Io(e)
            }
        })?;

        Ok(Self {
            path: fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()),
            len: metadata.len(),
            modified: metadata.modified().ok(),
            today,
        })
    }
}

/// Memoized loader keyed on source identity
///
/// Holds at most one dataset. A load with an unchanged identity returns the
/// cached dataset; any change reloads from scratch. Failures are not cached.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entry: Option<(SourceIdentity, Arc<Dataset>)>,
    hits: usize,
    misses: usize,
}

impl DatasetCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for the configured source, loading it if needed
    pub fn get_or_load(&mut self, config: &DashboardConfig) -> Result<Arc<Dataset>> {
        let identity = SourceIdentity::of(&config.source_path, config.today())?;

        if let Some((cached_identity, dataset)) = &self.entry {
            if *cached_identity == identity {
                self.hits += 1;
                log::debug!("Dataset cache hit for {}", config.source_path.display());
                return Ok(Arc::clone(dataset));
            }
        }

        self.misses += 1;
        let dataset = Arc::new(load_requests(config)?);
        self.entry = Some((identity, Arc::clone(&dataset)));
        Ok(dataset)
    }

    /// Load through the cache and map the result for display
    pub fn load_outcome(&mut self, config: &DashboardConfig) -> LoadOutcome {
        let result = self.get_or_load(config);
        LoadOutcome::from_result(result, &config.source_path)
    }

    /// Drop the cached dataset
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits
    }

    #[must_use]
    pub fn misses(&self) -> usize {
        self.misses
    }
}
