//! Utility functions for error handling
//!
//! Helpers that turn raw filesystem failures into `DashboardError`s with
//! enough context to show the user.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{DashboardError, Result};

/// Check that a source path exists and is a regular file
///
/// # Arguments
/// * `path` - The path to check
/// * `purpose` - Why the file is needed (for error context)
pub fn ensure_source_file(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        log::warn!("Source not found while {purpose}: {}", path.display());
        return Err(DashboardError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    if !path.is_file() {
        return Err(DashboardError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Path is not a file, expected one for {purpose}: {}", path.display()),
        )));
    }

    Ok(())
}

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    ensure_source_file(path, purpose)?;

    match fs::File::open(path) {
        Ok(file) => Ok(file),
        Err(e) => {
            // The file can vanish between the existence check and the open
            if e.kind() == io::ErrorKind::NotFound {
                return Err(DashboardError::SourceNotFound {
                    path: path.to_path_buf(),
                });
            }

            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Permission denied - check file permissions".to_string()
                }
                _ => format!("Failed to open file for: {purpose}"),
            };

            Err(DashboardError::Io(io::Error::new(
                e.kind(),
                format!("{context} ({}): {e}", path.display()),
            )))
        }
    }
}

/// Create a file for writing, creating missing parent directories
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::File::create(path).map_err(|e| {
        DashboardError::Io(io::Error::new(
            e.kind(),
            format!("Failed to create {} for {purpose}: {e}", path.display()),
        ))
    })
}
