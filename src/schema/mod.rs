//! Column layout of the SC summary spreadsheet and of the prepared views.

pub mod date_utils;
pub mod views;

pub use date_utils::{detect_date_format, excel_serial_to_date, parse_date_string};
pub use views::{ranking_view_schema, request_view_schema, tier_view_schema};

/// Purchase request identifier
pub const COL_SC: &str = "SC";
/// Work-breakdown-segment code
pub const COL_WBS: &str = "WBS";
/// Monetary value
pub const COL_VALOR: &str = "VALOR";
/// Creation date
pub const COL_DATA_CRIACAO: &str = "DATA CRIAÇÃO";
/// Requesting engineer
pub const COL_REQUISITANTE: &str = "REQUISITANTE";
/// Party the request is pending with
pub const COL_PENDENTE_COM: &str = "PENDENTE COM";
/// Project name
pub const COL_PROJETO: &str = "PROJETO";

/// Derived composite key, `SC-WBS`
pub const COL_SC_WBS: &str = "SC_WBS";
/// Derived project label, `PROJETO (WBS)`
pub const COL_PROJETO_COMPLETO: &str = "PROJETO_COMPLETO";
/// Derived days open
pub const COL_DIAS_EM_ABERTO: &str = "DIAS EM ABERTO";
/// Derived urgency tier label
pub const COL_URGENCIA: &str = "URGÊNCIA";
/// Derived priority score
pub const COL_SCORE: &str = "SCORE";

/// Columns a source must carry to be readable at all
pub const REQUIRED_COLUMNS: [&str; 3] = [COL_SC, COL_VALOR, COL_DATA_CRIACAO];

/// Categorical columns that get placeholders when absent
pub const CATEGORICAL_COLUMNS: [&str; 4] =
    [COL_WBS, COL_REQUISITANTE, COL_PENDENTE_COM, COL_PROJETO];

/// Columns derived only for filtering and never exported
pub const INTERNAL_COLUMNS: [&str; 2] = [COL_PROJETO_COMPLETO, COL_SC_WBS];

/// Whether a header name is one of the columns the loader interprets
#[must_use]
pub fn is_standard_column(name: &str) -> bool {
    REQUIRED_COLUMNS.contains(&name) || CATEGORICAL_COLUMNS.contains(&name)
}

/// Location of each interpreted column in a header row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    pub sc: usize,
    pub valor: usize,
    pub data_criacao: usize,
    pub wbs: Option<usize>,
    pub requisitante: Option<usize>,
    pub pendente_com: Option<usize>,
    pub projeto: Option<usize>,
}

impl ColumnIndex {
    /// Resolve column positions from a header row
    ///
    /// Header names are compared after trimming. Required columns that are
    /// missing produce a schema error naming the first one not found.
    pub fn from_header(header: &[String]) -> crate::Result<Self> {
        let find = |name: &str| header.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| crate::DashboardError::Schema(name.to_string()))
        };

        Ok(Self {
            sc: require(COL_SC)?,
            valor: require(COL_VALOR)?,
            data_criacao: require(COL_DATA_CRIACAO)?,
            wbs: find(COL_WBS),
            requisitante: find(COL_REQUISITANTE),
            pendente_com: find(COL_PENDENTE_COM),
            projeto: find(COL_PROJETO),
        })
    }
}
