mod project_store;
mod script_dialect;

pub use project_store::ProjectStore;
pub use script_dialect::ScriptDialect;
