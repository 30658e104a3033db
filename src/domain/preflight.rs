//! Pre-flight checks run before any script is generated.

use serde::Deserialize;
use tracing::debug;

use crate::domain::{AppError, BootSettings, LifecycleHandle};
use crate::ports::ProjectStore;

/// Facts about the host project resolved during pre-flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    /// `name` from the Rojo project descriptor.
    pub project_name: String,
    pub lifecycle: LifecycleHandle,
}

#[derive(Debug, Deserialize)]
struct RojoProject {
    name: String,
}

/// Verify project markers and resolve the lifecycle-handle package.
///
/// Markers are checked in order: project descriptor, dependency manifest,
/// toolchain pin. The first missing one aborts the run.
pub fn check(
    store: &impl ProjectStore,
    settings: &BootSettings,
) -> Result<ProjectContext, AppError> {
    if !store.file_exists(&settings.project_marker) {
        return Err(AppError::unresolved(format!(
            "boot requires a Rojo project ({} not found)",
            settings.project_marker
        )));
    }
    if !store.file_exists(&settings.manifest_marker) {
        return Err(AppError::unresolved(format!(
            "boot requires wally ({} not found)",
            settings.manifest_marker
        )));
    }
    if !settings.toolchain_markers.iter().any(|marker| store.file_exists(marker)) {
        return Err(AppError::unresolved(format!(
            "boot requires a toolchain manager ({} not found)",
            settings.toolchain_markers.join(" or ")
        )));
    }

    let project_name = read_project_name(store, &settings.project_marker)?;
    let manifest = store.read_file(&settings.manifest_marker)?;
    let alias = package_nickname(&manifest, &settings.lifecycle_package)?.ok_or_else(|| {
        AppError::unresolved(format!(
            "{} is not listed under [dependencies] in {}",
            settings.lifecycle_package, settings.manifest_marker
        ))
    })?;
    debug!(project = %project_name, %alias, "pre-flight passed");

    Ok(ProjectContext {
        project_name,
        lifecycle: LifecycleHandle { alias, type_name: settings.lifecycle_type.clone() },
    })
}

fn read_project_name(store: &impl ProjectStore, marker: &str) -> Result<String, AppError> {
    let content = store.read_file(marker)?;
    let project: RojoProject = serde_json::from_str(&content)
        .map_err(|e| AppError::unresolved(format!("{marker} is not a Rojo project: {e}")))?;
    Ok(project.name)
}

/// Find the nickname a Wally manifest gives to `package` in `[dependencies]`.
pub fn package_nickname(manifest: &str, package: &str) -> Result<Option<String>, AppError> {
    let value: toml::Table = toml::from_str(manifest)
        .map_err(|e| AppError::unresolved(format!("wally manifest is invalid: {}", e.message())))?;

    let Some(dependencies) = value.get("dependencies").and_then(|d| d.as_table()) else {
        return Ok(None);
    };

    Ok(dependencies
        .iter()
        .find(|(_, spec)| spec.as_str().is_some_and(|s| s.trim() == package))
        .map(|(name, _)| name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryProjectStore;

    const WALLY: &str = r#"
[package]
name = "studio/game"
version = "0.1.0"
registry = "https://github.com/UpliftGames/wally-index"
realm = "shared"

[dependencies]
Maid = "nightcycle/maid@1.1.4"
"#;

    fn project() -> MemoryProjectStore {
        let store = MemoryProjectStore::new();
        store.add(
            "default.project.json",
            r#"{ "name": "game", "tree": { "$className": "DataModel" } }"#,
        );
        store.add("wally.toml", WALLY);
        store.add("aftman.toml", "[tools]\n");
        store
    }

    #[test]
    fn resolves_project_and_lifecycle_alias() {
        let context = check(&project(), &BootSettings::default()).unwrap();

        assert_eq!(context.project_name, "game");
        assert_eq!(context.lifecycle.alias, "Maid");
        assert_eq!(context.lifecycle.type_name, "Maid");
    }

    #[test]
    fn missing_project_descriptor_fails_first() {
        let store = MemoryProjectStore::new();

        let err = check(&store, &BootSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            AppError::UnresolvedDependency(ref m) if m.contains("default.project.json")
        ));
    }

    #[test]
    fn missing_manifest_fails() {
        let store = project();
        store.remove("wally.toml");

        let err = check(&store, &BootSettings::default()).unwrap_err();
        assert!(matches!(err, AppError::UnresolvedDependency(ref m) if m.contains("wally")));
    }

    #[test]
    fn either_toolchain_marker_is_accepted() {
        let store = project();
        store.remove("aftman.toml");
        assert!(check(&store, &BootSettings::default()).is_err());

        store.add("foreman.toml", "[tools]\n");
        assert!(check(&store, &BootSettings::default()).is_ok());
    }

    #[test]
    fn nickname_follows_manifest_alias() {
        let manifest = "[dependencies]\n\
                        Cleanup = \"nightcycle/maid@1.1.4\"\n\
                        Signal = \"sleitnick/signal@1.5.0\"\n";

        assert_eq!(
            package_nickname(manifest, "nightcycle/maid@1.1.4").unwrap().as_deref(),
            Some("Cleanup")
        );
    }

    #[test]
    fn unlisted_lifecycle_package_is_unresolved() {
        let store = project();
        store.add("wally.toml", "[dependencies]\nSignal = \"sleitnick/signal@1.5.0\"\n");

        let err = check(&store, &BootSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            AppError::UnresolvedDependency(ref m) if m.contains("nightcycle/maid")
        ));
    }
}
