use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for boot operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure while reading project files.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// `init` found an existing configuration file.
    #[error("boot is already initialized at {0}")]
    AlreadyInitialized(String),

    /// `build` ran before `init`.
    #[error("Boot config not found ({0}). Run 'boot init' first.")]
    ConfigMissing(String),

    /// Configuration does not match the expected schema.
    #[error("Malformed boot config: {0}")]
    ConfigMalformed(String),

    /// A required project marker or package dependency is absent.
    #[error("Unresolved dependency: {0}")]
    UnresolvedDependency(String),

    /// Writing a generated script failed.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// First CLI argument is not a known command.
    #[error("Unknown command '{0}'. Expected 'init' or 'build'.")]
    UnknownCommand(String),

    /// CLI invoked without a command.
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// A path resolves outside the project root.
    #[error("Path escapes the project root: {0}")]
    PathTraversal(String),

    /// Default configuration could not be serialized.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl From<toml::de::Error> for AppError {
    fn from(value: toml::de::Error) -> Self {
        AppError::ConfigMalformed(value.message().to_string())
    }
}

impl AppError {
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        AppError::ConfigMalformed(message.into())
    }

    pub fn unresolved<S: Into<String>>(message: S) -> Self {
        AppError::UnresolvedDependency(message.into())
    }
}
