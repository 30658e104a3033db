//! Init command implementation.

use crate::domain::AppError;

pub fn run_init() -> Result<(), AppError> {
    let config_file = crate::app::api::init()?;
    println!("✅ Initialized {}", config_file);
    Ok(())
}
