//! Logging and console output
//!
//! Log helpers keep the message format of load and export operations
//! consistent; console helpers print prepared views for the command line.

pub mod console;
pub mod log;

pub use console::{print_filter_options, print_load_failure, print_report};
pub use log::{log_load_report, log_operation_complete, log_operation_start, log_warning};
