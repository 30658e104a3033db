//! Project-level filesystem operations.
//!
//! All `path` arguments are relative to the project root.

use crate::domain::AppError;

/// Port for reading configuration and writing generated scripts.
pub trait ProjectStore {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    ///
    /// Failures surface as [`AppError::WriteFailure`].
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &str) -> bool;
}
