//! Command-line arguments of the dashboard front end
//!
//! Each flag renders one dashboard control.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use sc_urgency::config::{DEFAULT_EXPORT_FILE, DEFAULT_SOURCE_FILE};
use sc_urgency::filter::ALL_OPTION;

#[derive(Parser, Debug)]
#[command(name = "sc-urgency")]
#[command(version)]
#[command(about = "Análise de urgência de solicitações de compra (SC) em aberto", long_about = None)]
pub struct Cli {
    /// SC summary spreadsheet (xlsx, xls, ods or csv)
    #[arg(value_name = "ARQUIVO", default_value = DEFAULT_SOURCE_FILE)]
    pub source: PathBuf,

    /// Filter by requester
    #[arg(long = "requisitante", value_name = "NOME", default_value = ALL_OPTION)]
    pub requester: String,

    /// Filter by the party the SC is pending with
    #[arg(long = "aprovador", value_name = "NOME", default_value = ALL_OPTION)]
    pub approver: String,

    /// Filter by project label, `PROJETO (WBS)`
    #[arg(long = "projeto", value_name = "PROJETO", default_value = ALL_OPTION)]
    pub project: String,

    /// Criticality threshold in days (15, 30, 60 or 90)
    #[arg(long = "limite", value_name = "DIAS", default_value_t = 60)]
    pub threshold: u32,

    /// Export the filtered view as CSV
    #[arg(
        long = "export",
        value_name = "ARQUIVO",
        num_args = 0..=1,
        default_missing_value = DEFAULT_EXPORT_FILE
    )]
    pub export: Option<PathBuf>,

    /// Print the prepared views as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// List the options of each filter control and exit
    #[arg(long = "options")]
    pub options: bool,

    /// Reference date for days open (YYYY-MM-DD), defaults to today
    #[arg(long = "data-referencia", value_name = "DATA")]
    pub reference_date: Option<NaiveDate>,
}
