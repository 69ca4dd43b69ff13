//! Utility modules shared by the loader, the export and the binary.

pub mod logging;
