//! Loading and initializing `boot.toml`.

use tracing::debug;

use crate::domain::{AppError, BootOrder};
use crate::ports::ProjectStore;

/// Reads and writes the boot order stored in the project's config file.
pub struct ConfigResolver<'a, S: ProjectStore + ?Sized> {
    store: &'a S,
    config_file: &'a str,
}

impl<'a, S: ProjectStore + ?Sized> ConfigResolver<'a, S> {
    pub fn new(store: &'a S, config_file: &'a str) -> Self {
        Self { store, config_file }
    }

    /// Load and validate the boot order.
    pub fn load(&self) -> Result<BootOrder, AppError> {
        if !self.store.file_exists(self.config_file) {
            return Err(AppError::ConfigMissing(self.config_file.to_string()));
        }
        let content = self.store.read_file(self.config_file)?;
        let order = BootOrder::parse_toml(&content)?;
        debug!(domains = order.len(), config = self.config_file, "loaded boot order");
        Ok(order)
    }

    /// Write `template` as the initial configuration. Never overwrites.
    pub fn initialize(&self, template: &BootOrder) -> Result<(), AppError> {
        if self.store.file_exists(self.config_file) {
            return Err(AppError::AlreadyInitialized(self.config_file.to_string()));
        }
        let content = template.to_toml()?;
        self.store.write_file(self.config_file, &content)
    }
}
