//! Build command implementation.

use crate::domain::AppError;

pub fn run_build() -> Result<(), AppError> {
    let outcome = crate::app::api::build()?;

    if outcome.scripts.is_empty() {
        println!("✅ No domains with a build_path in {}", outcome.project_name);
        return Ok(());
    }
    for script in &outcome.scripts {
        println!(
            "✅ Generated {} ({}, {} modules)",
            script.destination, script.shape, script.module_count
        );
    }
    Ok(())
}
