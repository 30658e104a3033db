//! Init command - writes the default boot order.

use crate::app::AppContext;
use crate::domain::{AppError, BootOrder, ConfigResolver};
use crate::ports::{ProjectStore, ScriptDialect};

/// Write the default five-domain template to the config file.
///
/// Returns the config path that was written, relative to the project root.
/// Fails with `AlreadyInitialized` if a config already exists.
pub fn execute<S: ProjectStore, D: ScriptDialect>(
    ctx: &AppContext<S, D>,
    template: &BootOrder,
) -> Result<String, AppError> {
    let config_file = &ctx.settings().config_file;
    ConfigResolver::new(ctx.store(), config_file).initialize(template)?;
    Ok(config_file.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RobloxLuau;
    use crate::domain::BootSettings;
    use crate::testing::MemoryProjectStore;

    fn context() -> AppContext<MemoryProjectStore, RobloxLuau> {
        AppContext::new(MemoryProjectStore::new(), RobloxLuau, BootSettings::default())
    }

    #[test]
    fn writes_template_to_config_file() {
        let ctx = context();

        execute(&ctx, &BootOrder::template()).unwrap();

        let content = ctx.store().get("boot.toml").unwrap();
        assert!(content.contains("[[boot_order]]"));
        assert!(content.contains("domain_path = \"game/ReplicatedStorage/Packages\""));
        assert!(content.contains("build_path = \"src/Client/Boot.client.luau\""));
    }

    #[test]
    fn reports_configured_file_name() {
        let settings =
            BootSettings { config_file: "config/boot.toml".to_string(), ..BootSettings::default() };
        let ctx = AppContext::new(MemoryProjectStore::new(), RobloxLuau, settings);

        let written = execute(&ctx, &BootOrder::template()).unwrap();

        assert_eq!(written, "config/boot.toml");
        assert!(ctx.store().get("config/boot.toml").is_some());
    }

    #[test]
    fn fails_if_already_initialized() {
        let ctx = context();
        execute(&ctx, &BootOrder::template()).unwrap();
        let before = ctx.store().get("boot.toml");

        let result = execute(&ctx, &BootOrder::template());

        assert!(matches!(result, Err(AppError::AlreadyInitialized(_))));
        assert_eq!(ctx.store().get("boot.toml"), before);
    }
}
