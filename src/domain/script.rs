//! Intermediate representation of a generated boot script.
//!
//! The assembler produces [`ScriptLine`]s; a [`ScriptDialect`] turns each
//! statement into text only when the script is rendered.

use std::fmt;

use crate::ports::ScriptDialect;

/// Structural shape of a generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptShape {
    /// Reusable unit: a function taking the lifecycle handle.
    Module,
    /// Self-contained script that owns its lifecycle handle.
    TopLevel,
}

impl ScriptShape {
    pub fn label(&self) -> &'static str {
        match self {
            ScriptShape::Module => "module",
            ScriptShape::TopLevel => "top-level",
        }
    }
}

impl fmt::Display for ScriptShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle-handle dependency imported by every script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleHandle {
    /// Package nickname as declared in the dependency manifest.
    pub alias: String,
    /// Exported type name.
    pub type_name: String,
}

/// One module init call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootStatement {
    pub domain_path: String,
    pub module: String,
}

impl BootStatement {
    pub fn new(domain_path: impl Into<String>, module: impl Into<String>) -> Self {
        Self { domain_path: domain_path.into(), module: module.into() }
    }
}

/// Logical statements of a boot script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    StrictPragma,
    GeneratedMarker(String),
    Section(&'static str),
    RequireLifecycle,
    ImportLifecycleType,
    /// Opens the function that receives the lifecycle handle.
    FunctionOpen,
    /// Creates a fresh lifecycle handle as a local.
    ConstructHandle,
    Boot(BootStatement),
    RegisterTeardown,
    ReturnVoid,
    FunctionClose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub indent: usize,
    pub statement: Statement,
}

impl ScriptLine {
    fn at(indent: usize, statement: Statement) -> Self {
        Self { indent, statement }
    }
}

/// Build the full statement list for a script of the given shape.
pub fn script_lines(
    shape: ScriptShape,
    generated_header: &str,
    statements: &[BootStatement],
) -> Vec<ScriptLine> {
    let mut lines = vec![
        ScriptLine::at(0, Statement::StrictPragma),
        ScriptLine::at(0, Statement::GeneratedMarker(generated_header.to_string())),
        ScriptLine::at(0, Statement::Section("Services")),
        ScriptLine::at(0, Statement::Section("Packages")),
        ScriptLine::at(0, Statement::RequireLifecycle),
        ScriptLine::at(0, Statement::ImportLifecycleType),
    ];

    match shape {
        ScriptShape::Module => {
            lines.push(ScriptLine::at(0, Statement::FunctionOpen));
            lines.extend(boot_lines(statements, 1));
            lines.push(ScriptLine::at(1, Statement::RegisterTeardown));
            lines.push(ScriptLine::at(1, Statement::ReturnVoid));
            lines.push(ScriptLine::at(0, Statement::FunctionClose));
        }
        ScriptShape::TopLevel => {
            lines.push(ScriptLine::at(0, Statement::ConstructHandle));
            lines.extend(boot_lines(statements, 0));
            lines.push(ScriptLine::at(0, Statement::RegisterTeardown));
        }
    }

    lines
}

fn boot_lines(
    statements: &[BootStatement],
    indent: usize,
) -> impl Iterator<Item = ScriptLine> + '_ {
    statements.iter().cloned().map(move |s| ScriptLine::at(indent, Statement::Boot(s)))
}

/// Render statement lines to text with the given dialect.
pub fn render_lines<D: ScriptDialect + ?Sized>(
    lines: &[ScriptLine],
    lifecycle: &LifecycleHandle,
    dialect: &D,
) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let text = dialect.render_statement(&line.statement, lifecycle);
            format!("{}{}", dialect.indent_unit().repeat(line.indent), text)
        })
        .collect()
}

/// Rendered output for one domain with a build target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript {
    /// Declared build path; the file is written here.
    pub destination: String,
    /// Build path with variant markers stripped.
    pub instance_path: String,
    pub shape: ScriptShape,
    pub module_count: usize,
    pub lines: Vec<String>,
}

impl GeneratedScript {
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }
}
