//! Build command - generates one boot script per domain with a build path.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::{AppError, BootAssembler, ConfigResolver, GeneratedScript, preflight};
use crate::ports::{ProjectStore, ScriptDialect};

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    /// Rojo project name from the project descriptor.
    pub project_name: String,
    /// Scripts written, in boot order.
    pub scripts: Vec<GeneratedScript>,
}

/// Execute the build command.
///
/// Pre-flight runs before the config is read, and nothing is written unless
/// it passes. Scripts are written in order; a failed write leaves earlier
/// scripts in place.
pub fn execute<S: ProjectStore, D: ScriptDialect>(
    ctx: &AppContext<S, D>,
) -> Result<BuildOutcome, AppError> {
    let settings = ctx.settings();
    let project = preflight::check(ctx.store(), settings)?;

    let order = ConfigResolver::new(ctx.store(), &settings.config_file).load()?;

    let assembler =
        BootAssembler::new(ctx.dialect(), project.lifecycle.clone(), &settings.generated_header);
    let scripts = assembler.assemble(&order);
    warn_on_instance_collisions(&scripts);

    for script in &scripts {
        ctx.store().write_file(&script.destination, &script.content())?;
        info!(
            path = %script.destination,
            shape = %script.shape,
            modules = script.module_count,
            "wrote boot script"
        );
    }

    Ok(BuildOutcome { project_name: project.project_name, scripts })
}

fn warn_on_instance_collisions(scripts: &[GeneratedScript]) {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for script in scripts {
        if let Some(previous) = seen.insert(&script.instance_path, &script.destination) {
            warn!(
                instance = %script.instance_path,
                first = previous,
                second = %script.destination,
                "two boot scripts map to the same Rojo instance"
            );
        }
    }
}
