//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{FilesystemStore, RobloxLuau};
use crate::app::{
    AppContext,
    commands::{build, init},
};
use crate::domain::{BootOrder, BootSettings};

pub use crate::app::commands::build::BuildOutcome;
pub use crate::domain::AppError;

/// Create an `AppContext` for a given path.
fn create_context(
    path: PathBuf,
    settings: BootSettings,
) -> AppContext<FilesystemStore, RobloxLuau> {
    AppContext::new(FilesystemStore::new(path), RobloxLuau, settings)
}

/// Write the default `boot.toml` in the current directory.
///
/// Returns the config path written, relative to the project root.
pub fn init() -> Result<String, AppError> {
    init_at(std::env::current_dir()?)
}

/// Write the default `boot.toml` at the specified project root.
pub fn init_at(path: impl Into<PathBuf>) -> Result<String, AppError> {
    init_with(path, BootSettings::default())
}

/// Write the default boot order using explicit settings.
pub fn init_with(path: impl Into<PathBuf>, settings: BootSettings) -> Result<String, AppError> {
    let ctx = create_context(path.into(), settings);
    init::execute(&ctx, &BootOrder::template())
}

/// Generate boot scripts for the project in the current directory.
pub fn build() -> Result<BuildOutcome, AppError> {
    build_at(std::env::current_dir()?)
}

/// Generate boot scripts for the project at the specified root.
pub fn build_at(path: impl Into<PathBuf>) -> Result<BuildOutcome, AppError> {
    build_with(path, BootSettings::default())
}

/// Generate boot scripts using explicit settings.
pub fn build_with(
    path: impl Into<PathBuf>,
    settings: BootSettings,
) -> Result<BuildOutcome, AppError> {
    let ctx = create_context(path.into(), settings);
    build::execute(&ctx)
}
