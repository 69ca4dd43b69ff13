//! Export of filtered views.

pub mod delimited;

pub use delimited::{export_csv_bytes, export_csv_file, format_decimal, write_csv};
