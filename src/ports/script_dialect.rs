//! Target-language conventions for generated scripts.

use crate::domain::{LifecycleHandle, ScriptShape, Statement};

/// Port for the scripting dialect the boot scripts are emitted in.
pub trait ScriptDialect {
    /// Expression that loads the module `module` living under `domain_path`.
    fn module_reference(&self, domain_path: &str, module: &str) -> String;

    /// Statement that binds the lifecycle-handle package to `alias`.
    fn shared_dependency_reference(&self, alias: &str) -> String;

    /// Strip the given variant markers from a script path.
    fn normalize_output_path(&self, path: &str, markers: &[&str]) -> String;

    /// Decide the structural shape from the destination path.
    fn classify_shape(&self, path: &str) -> ScriptShape;

    /// Render a single statement, without indentation.
    fn render_statement(&self, statement: &Statement, lifecycle: &LifecycleHandle) -> String;

    /// One level of indentation.
    fn indent_unit(&self) -> &str {
        "\t"
    }
}
