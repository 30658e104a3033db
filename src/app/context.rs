use crate::domain::BootSettings;
use crate::ports::{ProjectStore, ScriptDialect};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ProjectStore, D: ScriptDialect> {
    store: S,
    dialect: D,
    settings: BootSettings,
}

impl<S: ProjectStore, D: ScriptDialect> AppContext<S, D> {
    /// Create a new application context.
    pub fn new(store: S, dialect: D, settings: BootSettings) -> Self {
        Self { store, dialect, settings }
    }

    /// Get a reference to the project store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the script dialect.
    pub fn dialect(&self) -> &D {
        &self.dialect
    }

    pub fn settings(&self) -> &BootSettings {
        &self.settings
    }
}
