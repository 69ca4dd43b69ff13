//! Error handling for the SC dashboard core.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for loading, filtering and exporting SC data
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The source spreadsheet does not exist
    #[error("Source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The source has an extension we cannot read
    #[error("Unsupported source format '{extension}': {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding a spreadsheet workbook
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// Error reading or writing delimited text
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The workbook has no worksheet or no header row
    #[error("Workbook has no data: {}", path.display())]
    EmptyWorkbook { path: PathBuf },

    /// A required column is missing from the header row
    #[error("Schema error: required column '{0}' not found")]
    Schema(String),

    /// Error building Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Error converting rows to Arrow with `serde_arrow`
    #[error("Arrow conversion error: {0}")]
    ArrowConversion(#[from] serde_arrow::Error),

    /// Error serializing views to JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A caller-supplied argument was rejected
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DashboardError {
    /// Whether this error means the source file is absent (as opposed to unreadable)
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }
}

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
