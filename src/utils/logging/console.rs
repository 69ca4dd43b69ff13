//! Console output utilities
//!
//! Printing for the command-line front end. Everything printed here is
//! computed elsewhere.

use crate::filter::FilterOptions;
use crate::report::DashboardReport;

/// Print a report as text, or as JSON when `json` is set
pub fn print_report(report: &DashboardReport, json: bool) -> crate::Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

/// Print the options of each filter control
pub fn print_filter_options(options: &FilterOptions) {
    let sections = [
        ("Requisitante", &options.requesters),
        ("Pendente com (Aprovador)", &options.approvers),
        ("Projeto", &options.projects),
    ];

    for (title, values) in sections {
        println!("{title}:");
        for value in values {
            println!("  - {value}");
        }
    }
}

/// Print the user-visible message of a failed load
pub fn print_load_failure(message: &str) {
    eprintln!("{message}");
}
