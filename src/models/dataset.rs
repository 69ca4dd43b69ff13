//! The cleaned set of purchase requests produced by one load.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::models::purchase_request::PurchaseRequest;
use crate::schema::{CATEGORICAL_COLUMNS, COL_DIAS_EM_ABERTO, INTERNAL_COLUMNS, is_standard_column};

/// Counters describing what cleaning did to the raw rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct LoadReport {
    /// Data rows present in the source
    pub rows_read: usize,
    /// Rows discarded for a missing, blank or `nan` SC
    pub dropped_missing_sc: usize,
    /// Rows discarded for an unparseable creation date
    pub dropped_invalid_date: usize,
    /// Values that were not numeric (or were negative) and became zero
    pub values_coerced: usize,
}

impl LoadReport {
    /// Rows kept after cleaning
    #[must_use]
    pub fn rows_kept(&self) -> usize {
        self.rows_read - self.dropped_missing_sc - self.dropped_invalid_date
    }
}

/// Immutable cleaned row set plus the metadata of the load that produced it
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<PurchaseRequest>,
    source_columns: Vec<String>,
    extra_columns: Vec<String>,
    loaded_at: Option<NaiveDateTime>,
    source: Option<PathBuf>,
    report: LoadReport,
}

impl Dataset {
    /// An empty dataset, the safe state after a failed load
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assemble a dataset from cleaned rows
    ///
    /// `source_columns` is the header of the source in its original order;
    /// the columns the loader does not interpret become the extra columns
    /// whose cells each row carries.
    #[must_use]
    pub fn new(rows: Vec<PurchaseRequest>, source_columns: Vec<String>, report: LoadReport) -> Self {
        let extra_columns = extra_columns_of(&source_columns);

        Self {
            rows,
            source_columns,
            extra_columns,
            loaded_at: None,
            source: None,
            report,
        }
    }

    /// Stamp the load time and source path
    #[must_use]
    pub fn with_load_info(mut self, loaded_at: NaiveDateTime, source: &Path) -> Self {
        self.loaded_at = Some(loaded_at);
        self.source = Some(source.to_path_buf());
        self
    }

    /// All cleaned rows in source order
    #[must_use]
    pub fn rows(&self) -> &[PurchaseRequest] {
        &self.rows
    }

    /// All rows as a view, the starting point of every filter
    #[must_use]
    pub fn view(&self) -> Vec<&PurchaseRequest> {
        self.rows.iter().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Source header in its original order
    #[must_use]
    pub fn source_columns(&self) -> &[String] {
        &self.source_columns
    }

    /// Source columns the loader carries through untouched
    #[must_use]
    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }

    /// Position of an extra column in each row's `extras`
    #[must_use]
    pub fn extra_index(&self, column: &str) -> Option<usize> {
        self.extra_columns.iter().position(|c| c == column)
    }

    #[must_use]
    pub fn loaded_at(&self) -> Option<NaiveDateTime> {
        self.loaded_at
    }

    /// Load time as shown on the dashboard, `dd/mm/YYYY HH:MM:SS`
    #[must_use]
    pub fn loaded_at_display(&self) -> Option<String> {
        self.loaded_at
            .map(|t| t.format("%d/%m/%Y %H:%M:%S").to_string())
    }

    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn report(&self) -> LoadReport {
        self.report
    }

    /// Columns of the detailed table and of the export
    ///
    /// Source columns keep their order, categorical columns the source
    /// lacked are appended, then `DIAS EM ABERTO` unless the source already
    /// had it. The two composite columns are never included.
    #[must_use]
    pub fn export_columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = self
            .source_columns
            .iter()
            .filter(|c| !INTERNAL_COLUMNS.contains(&c.as_str()))
            .cloned()
            .collect();

        for name in CATEGORICAL_COLUMNS {
            if !columns.iter().any(|c| c == name) {
                columns.push(name.to_string());
            }
        }

        if !columns.iter().any(|c| c == COL_DIAS_EM_ABERTO) {
            columns.push(COL_DIAS_EM_ABERTO.to_string());
        }

        columns
    }
}

/// Source columns the loader does not interpret, in source order
#[must_use]
pub fn extra_columns_of(source_columns: &[String]) -> Vec<String> {
    source_columns
        .iter()
        .filter(|c| !is_standard_column(c) && !is_derived_column(c))
        .cloned()
        .collect()
}

fn is_derived_column(name: &str) -> bool {
    name == COL_DIAS_EM_ABERTO || INTERNAL_COLUMNS.contains(&name)
}
