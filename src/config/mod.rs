//! Configuration for loading and exporting SC data.

use std::path::PathBuf;

use chrono::NaiveDate;

/// Default name of the summary spreadsheet
pub const DEFAULT_SOURCE_FILE: &str = "Gestão de SC em aberto - Engenharia de Projetos.xlsx";

/// Default name of the exported CSV file
pub const DEFAULT_EXPORT_FILE: &str = "analise_urgencia_sc.csv";

/// Placeholder for a missing WBS code
pub const PLACEHOLDER_UNASSIGNED: &str = "Não atribuído";

/// Placeholder for missing requester, approver or project
pub const PLACEHOLDER_UNINFORMED: &str = "Não informado";

/// Configuration for parsing date strings
#[derive(Debug, Clone)]
pub struct DateFormatConfig {
    /// Date-time formats tried first; the time part is discarded
    pub datetime_formats: Vec<String>,
    /// Date formats tried when no date-time format matched
    pub date_formats: Vec<String>,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            datetime_formats: vec![
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S%.f".to_string(),
                "%d/%m/%Y %H:%M:%S".to_string(),
                "%d/%m/%Y %H:%M".to_string(),
            ],
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2023-01-15
                "%d/%m/%Y".to_string(), // Brazilian: 15/01/2023
                "%d-%m-%Y".to_string(), // 15-01-2023
                "%d.%m.%Y".to_string(), // 15.01.2023
                "%Y/%m/%d".to_string(), // 2023/01/15
                "%Y%m%d".to_string(),   // Compact: 20230115
            ],
            enable_format_detection: true,
        }
    }
}

/// Configuration for the delimited export
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Field separator
    pub delimiter: u8,
    /// Decimal separator for floating point values
    pub decimal_separator: char,
    /// Prefix the output with a UTF-8 byte-order mark
    pub write_bom: bool,
    /// Suggested file name for downloads
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: b';',
            decimal_separator: ',',
            write_bom: true,
            file_name: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

/// Configuration for the dashboard core
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Path of the summary spreadsheet
    pub source_path: PathBuf,
    /// Placeholder for a missing WBS code
    pub unassigned_placeholder: String,
    /// Placeholder for missing requester, approver or project
    pub uninformed_placeholder: String,
    /// Date used as "today" when computing days open; `None` uses the local date
    pub reference_date: Option<NaiveDate>,
    /// Date format configuration for string-to-date conversions
    pub date_format_config: DateFormatConfig,
    /// Export settings
    pub export: ExportConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_FILE),
            unassigned_placeholder: PLACEHOLDER_UNASSIGNED.to_string(),
            uninformed_placeholder: PLACEHOLDER_UNINFORMED.to_string(),
            reference_date: None,
            date_format_config: DateFormatConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Create a configuration for a given source file
    #[must_use]
    pub fn for_source(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            ..Default::default()
        }
    }

    /// Fix "today" to a given date
    #[must_use]
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// The date days-open is measured against
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
