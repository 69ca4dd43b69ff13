//! Logging helpers
//!
//! Standardized messages for file operations over the `log` facade.

use std::path::Path;
use std::time::Duration;

use crate::models::LoadReport;

/// Log the start of an operation on a file
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation} {}", path.display());
}

/// Log the completion of an operation on a file
///
/// # Arguments
/// * `operation` - Past-tense verb, e.g. `read` or `exported`
/// * `path` - File that was operated on
/// * `rows` - Number of rows processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(operation: &str, path: &Path, rows: usize, elapsed: Option<Duration>) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {operation} {rows} rows from {} in {duration:?}",
            path.display()
        ),
        None => log::info!("Successfully {operation} {rows} rows to {}", path.display()),
    }
}

/// Log a warning, optionally tied to a file
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{message}: {}", path.display());
    } else {
        log::warn!("{message}");
    }
}

/// Log the row counters of a finished load
pub fn log_load_report(report: &LoadReport, path: &Path) {
    log::info!(
        "Loaded {} of {} rows from {} ({} without SC, {} with invalid date, {} values set to zero)",
        report.rows_kept(),
        report.rows_read,
        path.display(),
        report.dropped_missing_sc,
        report.dropped_invalid_date,
        report.values_coerced
    );

    if report.rows_read > 0 && report.rows_kept() == 0 {
        log_warning("No usable rows left after cleaning", Some(path));
    }
}
